//! Binary instruction decoding.

mod machine;
mod operands;
pub mod types;

pub use types::*;

use crate::enums::*;
use crate::status::{Result, Status};

const DECODER_MODE_COUNT: usize = DECODER_MODE_MAX_VALUE as usize + 1;

/// Decodes raw instruction bytes into [`DecodedInstruction`]s.
#[derive(Clone, Debug)]
pub struct Decoder {
    machine_mode: MachineMode,
    stack_width: StackWidth,
    decoder_mode: [bool; DECODER_MODE_COUNT],
}

impl Decoder {
    /// Creates a new decoder for the given machine mode and stack width.
    ///
    /// Fails with [`Status::InvalidArgument`] if the stack width does not
    /// match the machine mode.
    pub fn new(machine_mode: MachineMode, stack_width: StackWidth) -> Result<Decoder> {
        if machine_mode.stack_width() != stack_width {
            return Err(Status::InvalidArgument);
        }
        let mut decoder_mode = [false; DECODER_MODE_COUNT];
        decoder_mode[DecoderMode::Mpx as usize] = true;
        decoder_mode[DecoderMode::Cet as usize] = true;
        decoder_mode[DecoderMode::Lzcnt as usize] = true;
        decoder_mode[DecoderMode::Tzcnt as usize] = true;
        Ok(Decoder {
            machine_mode,
            stack_width,
            decoder_mode,
        })
    }

    /// Creates a decoder for the most common 64-bit configuration.
    pub fn new64() -> Decoder {
        Decoder::new(MachineMode::Long64, StackWidth::_64).unwrap()
    }

    /// Creates a decoder for the most common 32-bit configuration.
    pub fn new32() -> Decoder {
        Decoder::new(MachineMode::Legacy32, StackWidth::_32).unwrap()
    }

    /// Creates a decoder for the most common 16-bit configuration.
    pub fn new16() -> Decoder {
        Decoder::new(MachineMode::Legacy16, StackWidth::_16).unwrap()
    }

    /// Enables or disables (depending on `value`) the given decoder `mode`.
    pub fn enable_mode(&mut self, mode: DecoderMode, value: bool) -> Result<()> {
        self.decoder_mode[mode as usize] = value;
        Ok(())
    }

    pub fn machine_mode(&self) -> MachineMode {
        self.machine_mode
    }

    pub fn stack_width(&self) -> StackWidth {
        self.stack_width
    }

    pub(crate) fn mode_enabled(&self, mode: DecoderMode) -> bool {
        self.decoder_mode[mode as usize]
    }

    pub(crate) fn is_mode64(&self) -> bool {
        self.machine_mode == MachineMode::Long64
    }

    /// Decodes the first instruction in the given buffer.
    ///
    /// Returns `Ok(None)` when the buffer is empty or holds no complete
    /// instruction (end of stream).
    ///
    /// # Examples
    ///
    /// ```
    /// use oxidis::{Decoder, Mnemonic, VisibleOperands};
    ///
    /// static INT3: &[u8] = &[0xCC];
    /// let insn = Decoder::new64()
    ///     .decode_first::<VisibleOperands>(INT3)
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(insn.mnemonic, Mnemonic::INT3);
    /// ```
    pub fn decode_first<O: Operands>(&self, buffer: &[u8]) -> Result<Option<Instruction<O>>> {
        match machine::decode_instruction(self, buffer) {
            Ok((info, ops)) => {
                let operands = O::from_decode(&info, &ops);
                Ok(Some(Instruction {
                    info,
                    operands,
                }))
            }
            Err(Status::NoMoreData) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Returns an iterator that decodes all instructions in the buffer,
    /// yielding the runtime address, the raw bytes and the decoded
    /// instruction. Iteration stops at the first byte sequence that does
    /// not decode.
    pub fn decode_all<'this, 'buffer, O: Operands>(
        &'this self,
        buffer: &'buffer [u8],
        ip: u64,
    ) -> InstructionIter<'this, 'buffer, O> {
        InstructionIter {
            decoder: self,
            buffer,
            ip,
            _marker: core::marker::PhantomData,
        }
    }
}

/// Operand storage policy of an [`Instruction`].
pub trait Operands {
    fn from_decode(
        info: &DecodedInstruction,
        operands: &[DecodedOperand; MAX_OPERAND_COUNT],
    ) -> Self;

    fn as_slice(&self) -> &[DecodedOperand];
}

/// Stores no operands at all (fastest).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NoOperands;

impl Operands for NoOperands {
    fn from_decode(
        _info: &DecodedInstruction,
        _operands: &[DecodedOperand; MAX_OPERAND_COUNT],
    ) -> Self {
        NoOperands
    }

    fn as_slice(&self) -> &[DecodedOperand] {
        &[]
    }
}

/// Fixed-capacity operand storage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperandArrayVec<const MAX: usize> {
    operands: [DecodedOperand; MAX],
    count: usize,
}

impl<const MAX: usize> Operands for OperandArrayVec<MAX> {
    fn from_decode(
        info: &DecodedInstruction,
        operands: &[DecodedOperand; MAX_OPERAND_COUNT],
    ) -> Self {
        let count = if MAX == MAX_OPERAND_COUNT_VISIBLE {
            info.operand_count_visible as usize
        } else {
            info.operand_count as usize
        };
        let mut out: [DecodedOperand; MAX] = core::array::from_fn(|_| DecodedOperand::default());
        out[..count].clone_from_slice(&operands[..count]);
        OperandArrayVec {
            operands: out,
            count,
        }
    }

    fn as_slice(&self) -> &[DecodedOperand] {
        &self.operands[..self.count]
    }
}

/// Stores only the visible (printed) operands.
pub type VisibleOperands = OperandArrayVec<MAX_OPERAND_COUNT_VISIBLE>;

/// Stores all operands, hidden ones included.
pub type AllOperands = OperandArrayVec<MAX_OPERAND_COUNT>;

/// A decoded instruction bundled with its operand storage.
#[derive(Clone, Debug)]
pub struct Instruction<O> {
    info: DecodedInstruction,
    operands: O,
}

impl<O> core::ops::Deref for Instruction<O> {
    type Target = DecodedInstruction;

    fn deref(&self) -> &DecodedInstruction {
        &self.info
    }
}

impl<O: Operands> Instruction<O> {
    /// The decoded operands within this storage policy.
    pub fn operands(&self) -> &[DecodedOperand] {
        self.operands.as_slice()
    }

    /// The visible operands (never includes hidden ones, regardless of the
    /// storage policy).
    pub fn visible_operands(&self) -> &[DecodedOperand] {
        let count = self.info.operand_count_visible as usize;
        &self.operands.as_slice()[..count.min(self.operands.as_slice().len())]
    }
}

pub struct InstructionIter<'decoder, 'buffer, O> {
    decoder: &'decoder Decoder,
    buffer: &'buffer [u8],
    ip: u64,
    _marker: core::marker::PhantomData<O>,
}

impl<'decoder, 'buffer, O: Operands> Iterator for InstructionIter<'decoder, 'buffer, O> {
    type Item = (u64, &'buffer [u8], Instruction<O>);

    fn next(&mut self) -> Option<Self::Item> {
        match self.decoder.decode_first::<O>(self.buffer) {
            Ok(Some(insn)) => {
                let length = insn.length as usize;
                let raw = &self.buffer[..length];
                let ip = self.ip;
                self.buffer = &self.buffer[length..];
                self.ip += length as u64;
                Some((ip, raw, insn))
            }
            _ => None,
        }
    }
}
