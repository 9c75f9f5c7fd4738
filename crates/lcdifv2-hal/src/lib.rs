#![no_std]

/// Abstracts 32-bit register access to an LCDIFv2 instance.
///
/// Implementations decide how a byte offset into the peripheral's register
/// space turns into an actual access: a volatile MMIO pointer on hardware,
/// a plain array in a software model. Offsets are always relative to the
/// instance base and 4-byte aligned.
pub trait RegisterBus {
    type Error: core::fmt::Debug;

    /// Read the 32-bit register at `offset`.
    fn read_register(&mut self, offset: usize) -> Result<u32, Self::Error>;

    /// Write the 32-bit register at `offset`.
    fn write_register(&mut self, offset: usize, value: u32) -> Result<(), Self::Error>;

    /// Read-modify-write the register at `offset`.
    fn modify_register(
        &mut self,
        offset: usize,
        f: impl FnOnce(u32) -> u32,
    ) -> Result<(), Self::Error> {
        let value = self.read_register(offset)?;
        self.write_register(offset, f(value))
    }

    /// Set the bits of `mask` in the register at `offset`.
    fn set_bits(&mut self, offset: usize, mask: u32) -> Result<(), Self::Error> {
        self.modify_register(offset, |v| v | mask)
    }

    /// Clear the bits of `mask` in the register at `offset`.
    fn clear_bits(&mut self, offset: usize, mask: u32) -> Result<(), Self::Error> {
        self.modify_register(offset, |v| v & !mask)
    }
}

/// Memory-mapped register access for a real peripheral instance.
///
/// All accesses are volatile. The caller owns the aliasing story: at most
/// one `MmioBus` per peripheral instance, and the base pointer must cover
/// the full register space.
pub struct MmioBus {
    base: *mut u8,
}

impl MmioBus {
    /// Wrap a peripheral base address.
    ///
    /// # Safety
    ///
    /// `base` must point to the start of an LCDIFv2 register space that is
    /// valid for volatile reads and writes for the lifetime of the bus,
    /// and no other code may access those registers concurrently.
    #[must_use]
    pub const unsafe fn from_ptr(base: *mut ()) -> Self {
        Self { base: base as *mut u8 }
    }

    /// The wrapped base address.
    #[must_use]
    pub const fn as_ptr(&self) -> *mut () {
        self.base as *mut ()
    }
}

// The bus is a handle to a fixed peripheral address, not to host memory.
unsafe impl Send for MmioBus {}

impl RegisterBus for MmioBus {
    type Error = core::convert::Infallible;

    fn read_register(&mut self, offset: usize) -> Result<u32, Self::Error> {
        let ptr = self.base.wrapping_add(offset) as *const u32;
        Ok(unsafe { ptr.read_volatile() })
    }

    fn write_register(&mut self, offset: usize, value: u32) -> Result<(), Self::Error> {
        let ptr = self.base.wrapping_add(offset) as *mut u32;
        unsafe { ptr.write_volatile(value) };
        Ok(())
    }
}
