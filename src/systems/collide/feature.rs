/// Edge labels of a box in its local frame, counter-clockwise starting with
/// the bottom-right to top-right edge.
///
/// ```text
///        e3
///   v2 ------ v1
///    |        |
/// e4 |        | e1
///    |        |
///   v3 ------ v4
///        e2
/// ```
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeNumber {
    #[default]
    NoEdge = 0,
    Edge1 = 1,
    Edge2 = 2,
    Edge3 = 3,
    Edge4 = 4,
}

/// Identifies the pair of features that produced a contact point.
///
/// The `*1` half names edges of the reference box, the `*2` half edges of
/// the incident box. When the reference face belongs to the second body of
/// the pair, the halves are swapped ([`FeatureId::flip`]), so the same
/// geometric pairing yields the same id regardless of which box supplied the
/// reference face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FeatureId {
    pub in_edge1: EdgeNumber,
    pub out_edge1: EdgeNumber,
    pub in_edge2: EdgeNumber,
    pub out_edge2: EdgeNumber,
}

impl FeatureId {
    pub const fn new(
        in_edge1: EdgeNumber,
        out_edge1: EdgeNumber,
        in_edge2: EdgeNumber,
        out_edge2: EdgeNumber,
    ) -> Self {
        Self { in_edge1, out_edge1, in_edge2, out_edge2 }
    }

    /// Swap reference and incident halves.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.in_edge1, &mut self.in_edge2);
        std::mem::swap(&mut self.out_edge1, &mut self.out_edge2);
    }

    /// Packed form, one byte per edge label.
    pub fn value(&self) -> u32 {
        u32::from_le_bytes([
            self.in_edge1 as u8,
            self.out_edge1 as u8,
            self.in_edge2 as u8,
            self.out_edge2 as u8,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EdgeNumber::*;

    #[test]
    fn flip_swaps_halves_and_is_an_involution() {
        let base = FeatureId::new(Edge1, Edge2, Edge3, Edge4);
        let mut f = base;
        f.flip();
        assert_eq!(f, FeatureId::new(Edge3, Edge4, Edge1, Edge2));
        assert_ne!(f.value(), base.value());
        f.flip();
        assert_eq!(f, base);
    }

    #[test]
    fn value_distinguishes_every_slot() {
        let a = FeatureId::new(Edge1, NoEdge, NoEdge, NoEdge);
        let b = FeatureId::new(NoEdge, Edge1, NoEdge, NoEdge);
        assert_ne!(a.value(), b.value());
        assert_eq!(FeatureId::default().value(), 0);
    }
}
