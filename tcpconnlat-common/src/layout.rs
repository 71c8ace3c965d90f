//! Layout description for records shared across the kernel/user boundary.
//!
//! Offsets and sizes are taken from the compiled type itself, so the numbers
//! can never drift from what the compiler actually laid out for the current
//! target.

/// Byte offset and size of one named field within a `#[repr(C)]` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
    pub size: usize,
}

impl FieldLayout {
    /// First byte past the field.
    pub fn end(&self) -> usize {
        self.offset + self.size
    }
}

/// Builds a `[FieldLayout; N]` for the listed fields of a `#[repr(C)]`
/// struct, in the listed order.
///
/// Sizes are measured by projecting a raw pointer through a `MaybeUninit`,
/// so no value of the type is ever created or read.
#[macro_export]
macro_rules! field_layouts {
    ($ty:ty { $($field:ident),+ $(,)? }) => {{
        fn pointee_size<T>(_: *const T) -> usize {
            ::core::mem::size_of::<T>()
        }
        let record = ::core::mem::MaybeUninit::<$ty>::uninit();
        [$(
            $crate::FieldLayout {
                name: ::core::stringify!($field),
                offset: ::core::mem::offset_of!($ty, $field),
                // Pointer projection only, the uninitialized memory is
                // never read.
                size: pointee_size(unsafe {
                    ::core::ptr::addr_of!((*record.as_ptr()).$field)
                }),
            }
        ),+]
    }};
}
