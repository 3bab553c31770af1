//! Hilbert-curve lookup tables, built at compile time.
//!
//! Each table maps 4 levels at once. `POS` turns a key `iiiijjjjoo` into
//! `ppppppppoo`; `IJ` is the inverse (`ppppppppoo` into `iiiijjjjoo`), where
//! `i`/`j` are coordinate bits, `p` position bits and `o` the orientation.

/// Orientation bit: swap `i` and `j`.
pub(crate) const SWAP_MASK: u16 = 0x01;
/// Orientation bit: invert both axes.
pub(crate) const INVERT_MASK: u16 = 0x02;

pub(crate) const LOOKUP_BITS: u32 = 4;

/// Orientation change when descending into child position `0..4`.
const POS_TO_ORIENTATION: [u16; 4] = [SWAP_MASK, 0, 0, INVERT_MASK | SWAP_MASK];

/// `(i,j)` quadrant (`2·i + j`) of child position `k` under orientation `o`.
const POS_TO_IJ: [[u16; 4]; 4] = [
    [0, 1, 3, 2], // canonical
    [0, 2, 3, 1], // swapped
    [3, 2, 0, 1], // inverted
    [3, 1, 0, 2], // swapped and inverted
];

pub(crate) struct Lookup {
    pub(crate) pos: [u16; 1024],
    pub(crate) ij: [u16; 1024],
}

pub(crate) const LOOKUP: Lookup = build();

const fn build() -> Lookup {
    let mut pos_table = [0u16; 1024];
    let mut ij_table = [0u16; 1024];
    let mut orig = 0u16;
    while orig < 4 {
        let mut pos = 0u16;
        while pos < 256 {
            let (mut i, mut j, mut orientation) = (0u16, 0u16, orig);
            let mut level = 0;
            while level < LOOKUP_BITS {
                let quad = (pos >> (2 * (LOOKUP_BITS - 1 - level))) & 3;
                let r = POS_TO_IJ[orientation as usize][quad as usize];
                i = (i << 1) + (r >> 1);
                j = (j << 1) + (r & 1);
                orientation ^= POS_TO_ORIENTATION[quad as usize];
                level += 1;
            }
            let ij = (i << LOOKUP_BITS) + j;
            pos_table[((ij << 2) + orig) as usize] = (pos << 2) + orientation;
            ij_table[((pos << 2) + orig) as usize] = (ij << 2) + orientation;
            pos += 1;
        }
        orig += 1;
    }
    Lookup {
        pos: pos_table,
        ij: ij_table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_mutual_inverses() {
        for key in 0..1024usize {
            let pos = LOOKUP.pos[key];
            let orig = (key & 3) as u16;
            let back = LOOKUP.ij[((pos & !3) | orig) as usize];
            assert_eq!(back >> 2, (key >> 2) as u16, "key {key}");
            assert_eq!(back & 3, pos & 3, "orientation for key {key}");
        }
    }

    #[test]
    fn first_entries_follow_the_curve() {
        // Orientation 0, i = 0000, j = 0001. The first three levels take
        // quadrant 0 and each swaps the orientation, so the last level reads
        // the swapped row, where quadrant (0,1) sits at position 3.
        assert_eq!(LOOKUP.pos[0] >> 2, 0);
        assert_eq!(LOOKUP.pos[1 << 2] >> 2, 3);
        assert_eq!(LOOKUP.pos[1 << 2] & 3, INVERT_MASK);
        assert_eq!(LOOKUP.ij[0] >> 2, 0);
    }
}
