/// Watson-Crick complement of a nucleotide. Case is preserved and any symbol other than
/// A/C/G/T (e.g. N or IUPAC ambiguity codes) is returned unchanged.
#[inline(always)]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        b'a' => b't',
        b't' => b'a',
        b'c' => b'g',
        b'g' => b'c',
        other => other,
    }
}

/// Reverse complement of a nucleotide sequence, i.e. the same molecule read 5'->3' on the
/// opposite strand.
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&base| complement(base)).collect()
}
