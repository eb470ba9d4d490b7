//! Records
//!
//! A [`Record`] is an ordered tuple of values. It enforces nothing on its
//! own; records only come out of [`Schema::verify`](super::Schema::verify)
//! and [`Schema::decode`](super::Schema::decode), so every record in
//! circulation conforms to the schema that produced it.

use std::fmt;

use crate::datatypes::Value;

/// One tuple of typed values
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Returns the number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the record has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the value at `index`
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns all values in column order
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Consumes the record, returning its values
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Sum of the widths of all values
    pub(crate) fn encoded_len(&self) -> usize {
        self.values.iter().map(Value::width).sum()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = Record::new(vec![]);
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert_eq!(record.encoded_len(), 0);
        assert_eq!(record.to_string(), "()");
    }

    #[test]
    fn test_accessors() {
        let record = Record::new(vec![Value::Int(42), Value::Bool(true), Value::text("abc", 3)]);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get(0), Some(&Value::Int(42)));
        assert_eq!(record.get(3), None);
        assert_eq!(record.encoded_len(), 8);
        assert_eq!(record.iter().count(), 3);
        assert_eq!(record.to_string(), "(42, true, 'abc')");
        assert_eq!(record.into_values().len(), 3);
    }
}
