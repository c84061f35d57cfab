use num_traits::{One, PrimInt};

/// Trait implemented by enums whose discriminant names a bit.
///
/// The backing integer is chosen through the associated `Storage`; the bit index must be
/// smaller than the number of bits in `Storage`.
pub trait FlagBitmask {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// A plain set of flags stored in a primitive integer.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    /// Build a set from a list of flags.
    pub fn of<U: FlagBitmask<Storage = T>>(tags: &[U]) -> Self {
        let bits = tags.iter().fold(T::zero(), |bits, tag| bits | tag.mask());
        Self { bits }
    }

    pub fn has<U: FlagBitmask<Storage = T>>(&self, tag: U) -> bool {
        (self.bits & tag.mask()) != T::zero()
    }
}
