use crate::domain::body::BodyId;

/// Unordered pair of bodies. `(a, b)` and `(b, a)` build the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArbiterKey {
    body1: BodyId,
    body2: BodyId,
}

impl ArbiterKey {
    pub fn new(a: BodyId, b: BodyId) -> Self {
        if a <= b {
            Self { body1: a, body2: b }
        } else {
            Self { body1: b, body2: a }
        }
    }

    /// Lower id of the pair
    #[inline]
    pub fn body1(&self) -> BodyId {
        self.body1
    }

    /// Higher id of the pair
    #[inline]
    pub fn body2(&self) -> BodyId {
        self.body2
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn key_is_symmetric() {
        let ab = ArbiterKey::new(BodyId(3), BodyId(7));
        let ba = ArbiterKey::new(BodyId(7), BodyId(3));
        assert_eq!(ab, ba);
        assert_eq!(ab.body1(), BodyId(3));
        assert_eq!(ab.body2(), BodyId(7));

        let mut map = HashMap::new();
        map.insert(ab, "pair");
        assert_eq!(map.get(&ba), Some(&"pair"));
    }

    #[test]
    fn keys_order_by_first_then_second_body() {
        let mut keys = vec![
            ArbiterKey::new(BodyId(2), BodyId(1)),
            ArbiterKey::new(BodyId(0), BodyId(5)),
            ArbiterKey::new(BodyId(1), BodyId(0)),
        ];
        keys.sort();
        assert_eq!(keys[0], ArbiterKey::new(BodyId(0), BodyId(1)));
        assert_eq!(keys[1], ArbiterKey::new(BodyId(0), BodyId(5)));
        assert_eq!(keys[2], ArbiterKey::new(BodyId(1), BodyId(2)));
    }
}
