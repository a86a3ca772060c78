//! Register model: class/id mapping, mode-dependent widths, enclosing
//! registers and name lookup.

use core::fmt;

use crate::enums::register::{REGISTERS, REGISTER_INFO};
use crate::enums::{MachineMode, Register, RegisterClass};

impl Register {
    /// Returns the ID of this register within its register class.
    ///
    /// # Examples
    /// ```
    /// use oxidis::Register;
    /// assert_eq!(0, Register::RAX.get_id());
    /// ```
    pub fn get_id(self) -> u8 {
        REGISTER_INFO[self as usize].id
    }

    /// Returns the register-class of this register.
    ///
    /// # Examples
    /// ```
    /// use oxidis::{Register, RegisterClass};
    /// assert_eq!(RegisterClass::Gpr32, Register::ECX.get_class());
    /// ```
    pub fn get_class(self) -> RegisterClass {
        REGISTER_INFO[self as usize].class
    }

    /// Returns the textual representation of this register.
    ///
    /// # Examples
    /// ```
    /// use oxidis::Register;
    /// assert_eq!(Register::EAX.get_string(), Some("eax"));
    /// ```
    pub fn get_string(self) -> Option<&'static str> {
        match self {
            Register::None => None,
            other => Some(REGISTER_INFO[other as usize].name),
        }
    }

    /// Returns the width of this register in the given machine mode, in
    /// bits. Returns `0` for registers that are not addressable in the
    /// given mode.
    ///
    /// # Examples
    /// ```
    /// use oxidis::{MachineMode, Register};
    /// assert_eq!(32, Register::DR0.get_width(MachineMode::Legacy32));
    /// assert_eq!(64, Register::DR0.get_width(MachineMode::Long64));
    /// ```
    pub fn get_width(self, mode: MachineMode) -> u16 {
        let info = &REGISTER_INFO[self as usize];
        if mode == MachineMode::Long64 {
            info.width64
        } else {
            info.width
        }
    }

    /// Returns the largest enclosing register of this register in the given
    /// mode, e.g. `RAX` for `EAX` in 64-bit mode. `AH` encloses to `RAX` as
    /// well, occupying its high byte.
    ///
    /// Returns `Register::None` for registers that are not addressable in
    /// the given mode.
    ///
    /// # Examples
    /// ```
    /// use oxidis::{MachineMode, Register};
    /// assert_eq!(
    ///     Register::RAX,
    ///     Register::EAX.get_largest_enclosing(MachineMode::Long64)
    /// );
    /// ```
    pub fn get_largest_enclosing(self, mode: MachineMode) -> Register {
        let is64 = mode == MachineMode::Long64;
        let class = self.get_class();
        let id = match class {
            // The high-byte bank aliases the low GPR ids.
            RegisterClass::Gpr8 if (Register::AH..=Register::BH).contains(&self) => {
                self.get_id() - 4
            }
            _ => self.get_id(),
        };
        match class {
            RegisterClass::Gpr8 | RegisterClass::Gpr16 | RegisterClass::Gpr32
            | RegisterClass::Gpr64 => {
                if is64 {
                    RegisterClass::Gpr64.encode(id)
                } else if id < 8 {
                    RegisterClass::Gpr32.encode(id)
                } else {
                    Register::None
                }
            }
            RegisterClass::Xmm | RegisterClass::Ymm | RegisterClass::Zmm => {
                if is64 || id < 8 {
                    RegisterClass::Zmm.encode(id)
                } else {
                    Register::None
                }
            }
            RegisterClass::Flags => {
                if is64 {
                    Register::RFLAGS
                } else {
                    Register::EFLAGS
                }
            }
            RegisterClass::Ip => {
                if is64 {
                    Register::RIP
                } else {
                    Register::EIP
                }
            }
            RegisterClass::Invalid => Register::None,
            _ => self,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.get_string().unwrap_or("none"))
    }
}

impl RegisterClass {
    /// Returns the register specified by this register class and `id`, or
    /// `Register::None` if the combination is invalid.
    ///
    /// # Examples
    /// ```
    /// use oxidis::{Register, RegisterClass};
    /// assert_eq!(Register::EAX, RegisterClass::Gpr32.encode(0));
    /// assert_eq!(Register::None, RegisterClass::Gpr32.encode(16));
    /// ```
    pub fn encode(self, id: u8) -> Register {
        let (first, count) = match self {
            // The 8-bit GPR bank is split around the high-byte aliases; ids
            // 8..16 start at `R8B`.
            RegisterClass::Gpr8 if id < 8 => (Register::AL, 8),
            RegisterClass::Gpr8 => (Register::R8B, 16),
            RegisterClass::Gpr16 => (Register::AX, 16),
            RegisterClass::Gpr32 => (Register::EAX, 16),
            RegisterClass::Gpr64 => (Register::RAX, 16),
            RegisterClass::X87 => (Register::ST0, 8),
            RegisterClass::Mmx => (Register::MM0, 8),
            RegisterClass::Xmm => (Register::XMM0, 32),
            RegisterClass::Ymm => (Register::YMM0, 32),
            RegisterClass::Zmm => (Register::ZMM0, 32),
            RegisterClass::Flags => (Register::FLAGS, 3),
            RegisterClass::Ip => (Register::IP, 3),
            RegisterClass::Segment => (Register::ES, 6),
            RegisterClass::Test => (Register::TR0, 8),
            RegisterClass::Control => (Register::CR0, 16),
            RegisterClass::Debug => (Register::DR0, 16),
            RegisterClass::Mask => (Register::K0, 8),
            RegisterClass::Bound => (Register::BND0, 6),
            RegisterClass::Invalid => return Register::None,
        };
        if id >= count {
            return Register::None;
        }
        let base_id = REGISTER_INFO[first as usize].id;
        REGISTERS[first as usize + (id - base_id) as usize]
    }

    /// Returns the width of this register class in the given mode, in bits.
    pub fn get_width(self, mode: MachineMode) -> u16 {
        self.encode(0).get_width(mode)
    }
}

/// Resolves an 8-bit GPR id to a register, honoring the REX quirk: without
/// a REX prefix ids 4..8 select the high-byte bank (`AH`..`BH`), with one
/// they select `SPL`..`DIL`.
pub(crate) fn encode_gpr8(id: u8, rex_present: bool) -> Register {
    match id {
        4..=7 if rex_present => REGISTERS[Register::SPL as usize + (id - 4) as usize],
        _ => RegisterClass::Gpr8.encode(id),
    }
}

/// Resolves a GPR id against an operand width in bits.
pub(crate) fn encode_gpr(width: u16, id: u8, rex_present: bool) -> Register {
    match width {
        8 => encode_gpr8(id, rex_present),
        16 => RegisterClass::Gpr16.encode(id),
        32 => RegisterClass::Gpr32.encode(id),
        64 => RegisterClass::Gpr64.encode(id),
        _ => Register::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_and_id_round_trip() {
        for &reg in REGISTERS.iter().skip(1) {
            let class = reg.get_class();
            // The high-byte/REX bank overlaps in id-space, skip the aliases.
            if (Register::SPL..=Register::DIL).contains(&reg) {
                continue;
            }
            assert_eq!(class.encode(reg.get_id()), reg, "{:?}", reg);
        }
    }

    #[test]
    fn gpr8_rex_bank() {
        assert_eq!(encode_gpr8(4, false), Register::AH);
        assert_eq!(encode_gpr8(4, true), Register::SPL);
        assert_eq!(encode_gpr8(12, true), Register::R12B);
    }

    #[test]
    fn enclosing_registers() {
        assert_eq!(
            Register::AH.get_largest_enclosing(MachineMode::Long64),
            Register::RAX
        );
        assert_eq!(
            Register::R8D.get_largest_enclosing(MachineMode::Legacy32),
            Register::None
        );
        assert_eq!(
            Register::XMM3.get_largest_enclosing(MachineMode::Long64),
            Register::ZMM3
        );
        assert_eq!(
            Register::EIP.get_largest_enclosing(MachineMode::Long64),
            Register::RIP
        );
    }

    #[test]
    fn widths() {
        assert_eq!(Register::SPL.get_width(MachineMode::Legacy32), 0);
        assert_eq!(Register::CR0.get_width(MachineMode::Long64), 64);
        assert_eq!(RegisterClass::Segment.get_width(MachineMode::Long64), 16);
    }
}
