use std::mem;

use log::debug;
use tcpconnlat_common::Event;

mod report;

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let fields = Event::layout();
    debug!("reporting {} fields of the shared event record", fields.len());

    print!("{}", report::render(mem::size_of::<Event>(), &fields));
    Ok(())
}
