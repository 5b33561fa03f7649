//! Loading instruction words from files.
//!
//! Two inputs are understood: flat little-endian binaries, and 32-bit
//! RISC-V ELF executables (from which the `.text` section is taken).

use goblin::elf::Elf;
use goblin::elf::section_header::SHT_NOBITS;

/// ELF magic bytes.
const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Error type for program loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    /// Description of the error.
    pub reason: String,
}

impl LoadError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "load error: {}", self.reason)
    }
}

impl std::error::Error for LoadError {}

/// A run of instruction words and the address of the first one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Address of `words[0]`.
    pub base: u32,
    /// Instruction words in address order.
    pub words: Vec<u32>,
}

impl Program {
    /// Create a program from words already in memory.
    #[must_use]
    pub fn new(base: u32, words: Vec<u32>) -> Self {
        Self { base, words }
    }

    /// Load `bytes` as an ELF if they carry the ELF magic, otherwise as a
    /// flat binary starting at `base`.
    ///
    /// # Errors
    ///
    /// See [`Program::from_elf`] and [`Program::from_raw`].
    pub fn load(bytes: &[u8], base: u32) -> Result<Self, LoadError> {
        if bytes.starts_with(ELF_MAGIC) {
            Self::from_elf(bytes)
        } else {
            Self::from_raw(bytes, base)
        }
    }

    /// Read a flat binary of little-endian 32-bit words.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is not a multiple of four bytes.
    pub fn from_raw(bytes: &[u8], base: u32) -> Result<Self, LoadError> {
        if bytes.len() % 4 != 0 {
            return Err(LoadError::new(format!(
                "binary is {} bytes, not a whole number of 32-bit words",
                bytes.len()
            )));
        }
        let words = words_le(bytes);
        tracing::debug!(base, count = words.len(), "loaded flat binary");
        Ok(Self { base, words })
    }

    /// Read the `.text` section of a 32-bit little-endian RISC-V ELF.
    ///
    /// # Errors
    ///
    /// Returns an error if the ELF is invalid, not RV32, has no `.text`
    /// section, or the section lies outside the file.
    pub fn from_elf(bytes: &[u8]) -> Result<Self, LoadError> {
        let elf =
            Elf::parse(bytes).map_err(|e| LoadError::new(format!("failed to parse ELF: {e}")))?;
        validate_elf_header(&elf)?;

        let text = elf
            .section_headers
            .iter()
            .find(|sh| elf.shdr_strtab.get_at(sh.sh_name) == Some(".text"))
            .ok_or_else(|| LoadError::new("ELF has no .text section"))?;

        if text.sh_type == SHT_NOBITS {
            return Err(LoadError::new(".text section has no file contents"));
        }

        let base = u32::try_from(text.sh_addr).map_err(|_| {
            LoadError::new(format!(".text address {:#x} doesn't fit in u32", text.sh_addr))
        })?;
        let range = text
            .file_range()
            .ok_or_else(|| LoadError::new(".text section has no file range"))?;
        let data = bytes.get(range.clone()).ok_or_else(|| {
            LoadError::new(format!(
                ".text range {:#x}..{:#x} exceeds file size {:#x}",
                range.start,
                range.end,
                bytes.len()
            ))
        })?;

        if data.len() % 4 != 0 {
            tracing::warn!(
                size = data.len(),
                "ignoring trailing bytes of .text (compressed instructions?)"
            );
        }
        let words = words_le(data);
        tracing::info!(base, count = words.len(), "loaded ELF .text");
        Ok(Self { base, words })
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the program holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Address of the word at `index`, wrapping at the top of the address
    /// space.
    #[must_use]
    pub fn address_of(&self, index: usize) -> u32 {
        // Truncation is the wrap-around.
        #[allow(clippy::cast_possible_truncation)]
        let offset = index.wrapping_mul(4) as u32;
        self.base.wrapping_add(offset)
    }

    /// `(address, word)` pairs in order.
    pub fn addresses(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, &word)| (self.address_of(i), word))
    }
}

/// Validate the ELF header for RISC-V 32-bit little-endian.
fn validate_elf_header(elf: &Elf) -> Result<(), LoadError> {
    if elf.header.e_machine != goblin::elf::header::EM_RISCV {
        return Err(LoadError::new(format!(
            "expected RISC-V ELF (machine {}), got machine type {}",
            goblin::elf::header::EM_RISCV,
            elf.header.e_machine
        )));
    }
    if elf.is_64 {
        return Err(LoadError::new("expected 32-bit ELF, got 64-bit"));
    }
    if !elf.little_endian {
        return Err(LoadError::new("expected little-endian ELF"));
    }
    Ok(())
}

/// Split bytes into little-endian words, dropping any partial tail.
fn words_le(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        let bytes = [0x93, 0x00, 0xA0, 0x00, 0x13, 0x01, 0x01, 0xFF];
        let program = Program::from_raw(&bytes, 0x8000_0000).unwrap();
        assert_eq!(program.words, vec![0x00A0_0093, 0xFF01_0113]);
        assert_eq!(program.base, 0x8000_0000);
    }

    #[test]
    fn test_from_raw_rejects_partial_word() {
        let err = Program::from_raw(&[0x93, 0x00, 0xA0], 0).unwrap_err();
        assert!(err.reason.contains("3 bytes"));
    }

    #[test]
    fn test_load_dispatches_on_magic() {
        let raw = [0x13, 0x00, 0x00, 0x00];
        assert_eq!(Program::load(&raw, 4).unwrap().words, vec![0x13]);

        // ELF magic with a truncated header must go through the ELF path.
        let bogus = b"\x7fELF\x01\x01";
        let err = Program::load(bogus, 0).unwrap_err();
        assert!(err.reason.contains("ELF"));
    }

    #[test]
    fn test_addresses() {
        let program = Program::new(0x100, vec![1, 2, 3]);
        let addrs: Vec<_> = program.addresses().collect();
        assert_eq!(addrs, vec![(0x100, 1), (0x104, 2), (0x108, 3)]);
        assert_eq!(program.len(), 3);
        assert!(!program.is_empty());
    }

    #[test]
    fn test_address_wraps() {
        let program = Program::new(0xFFFF_FFFC, vec![0, 0]);
        assert_eq!(program.address_of(1), 0);
    }
}
