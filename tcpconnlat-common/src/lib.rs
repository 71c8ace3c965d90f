#![no_std]

use core::mem;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use core::ptr;

mod layout;

pub use layout::FieldLayout;

pub const TASK_COMM_LEN: usize = 16;

pub const AF_INET: u16 = 2;
pub const AF_INET6: u16 = 10;

/// One TCP connection latency measurement, written by the kernel probe and
/// read back verbatim in userspace. Field order is the wire layout; any
/// change here must be mirrored on the probe side.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Event {
    pub saddr_v4: u32,
    pub saddr_v6: [u8; 16],
    pub daddr_v4: u32,
    pub daddr_v6: [u8; 16],
    pub comm: [u8; TASK_COMM_LEN], // null-terminated
    pub delta_us: u64,
    pub ts_us: u64,
    pub tgid: u32,
    pub af: u16, // selects the v4 or v6 address slots
    pub lport: u16,
    pub dport: u16,
}

const _: () = assert!(mem::size_of::<Event>() % mem::align_of::<Event>() == 0);

impl Event {
    /// Reinterprets a raw record (e.g. a ring buffer item) as an `Event`.
    /// Returns `None` when the buffer is shorter than the record.
    pub fn from_bytes(bytes: &[u8]) -> Option<Event> {
        if bytes.len() < mem::size_of::<Event>() {
            return None;
        }
        // The producer wrote the record with this exact layout; the buffer
        // carries no alignment guarantee.
        Some(unsafe { ptr::read_unaligned(bytes.as_ptr() as *const Event) })
    }

    /// Source address for the family in `af`, `None` for unknown families.
    pub fn saddr(&self) -> Option<IpAddr> {
        match self.af {
            AF_INET => Some(IpAddr::V4(Ipv4Addr::from(self.saddr_v4.to_ne_bytes()))),
            AF_INET6 => Some(IpAddr::V6(Ipv6Addr::from(self.saddr_v6))),
            _ => None,
        }
    }

    /// Destination address for the family in `af`.
    pub fn daddr(&self) -> Option<IpAddr> {
        match self.af {
            AF_INET => Some(IpAddr::V4(Ipv4Addr::from(self.daddr_v4.to_ne_bytes()))),
            AF_INET6 => Some(IpAddr::V6(Ipv6Addr::from(self.daddr_v6))),
            _ => None,
        }
    }

    /// Executable name up to the first NUL.
    pub fn comm_str(&self) -> Option<&str> {
        let end = self
            .comm
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(self.comm.len());
        core::str::from_utf8(&self.comm[..end]).ok()
    }

    /// Field-by-field layout of the record, in declaration order.
    pub fn layout() -> [FieldLayout; 11] {
        field_layouts!(Event {
            saddr_v4,
            saddr_v6,
            daddr_v4,
            daddr_v6,
            comm,
            delta_us,
            ts_us,
            tgid,
            af,
            lport,
            dport,
        })
    }
}
