//! Write intents and atomic batches.

/// A single write intent against one column family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modify {
    /// Set `key` to `value` in column family `cf`
    Put {
        cf: String,
        key: Vec<u8>,
        value: Vec<u8>,
    },
    /// Remove `key` from column family `cf`
    Delete { cf: String, key: Vec<u8> },
}

impl Modify {
    /// Column family this intent targets.
    pub fn cf(&self) -> &str {
        match self {
            Modify::Put { cf, .. } | Modify::Delete { cf, .. } => cf,
        }
    }

    /// Logical key this intent targets.
    pub fn key(&self) -> &[u8] {
        match self {
            Modify::Put { key, .. } | Modify::Delete { key, .. } => key,
        }
    }

    /// Value for puts, `None` for deletes.
    pub fn value(&self) -> Option<&[u8]> {
        match self {
            Modify::Put { value, .. } => Some(value),
            Modify::Delete { .. } => None,
        }
    }
}

/// An ordered sequence of write intents applied as one atomic unit.
///
/// Entry order is preserved, but atomicity is the guarantee that matters:
/// either every entry commits or none does, and no entry observes another's
/// effect before commit.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    entries: Vec<Modify>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a put intent.
    pub fn put(&mut self, cf: impl Into<String>, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) {
        self.entries.push(Modify::Put {
            cf: cf.into(),
            key: key.into(),
            value: value.into(),
        });
    }

    /// Append a delete intent.
    pub fn delete(&mut self, cf: impl Into<String>, key: impl Into<Vec<u8>>) {
        self.entries.push(Modify::Delete {
            cf: cf.into(),
            key: key.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Modify> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_preserves_order() {
        let mut batch = Batch::new();
        batch.put("cf", b"k1".to_vec(), b"v1".to_vec());
        batch.delete("cf", b"k2".to_vec());
        batch.put("other", b"k3".to_vec(), b"v3".to_vec());

        let cfs: Vec<&str> = batch.iter().map(|m| m.cf()).collect();
        assert_eq!(cfs, vec!["cf", "cf", "other"]);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn test_modify_accessors() {
        let put = Modify::Put {
            cf: "cf".to_string(),
            key: b"k".to_vec(),
            value: b"v".to_vec(),
        };
        assert_eq!(put.cf(), "cf");
        assert_eq!(put.key(), b"k");
        assert_eq!(put.value(), Some(&b"v"[..]));

        let del = Modify::Delete {
            cf: "cf".to_string(),
            key: b"k".to_vec(),
        };
        assert_eq!(del.value(), None);
    }
}
