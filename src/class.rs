use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::error::BayesError;

/// One of the two labels a sentence can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    Zero,
    One,
}

impl Class {
    pub const ALL: [Class; 2] = [Class::Zero, Class::One];

    fn slot(self) -> usize {
        match self {
            Class::Zero => 0,
            Class::One => 1,
        }
    }
}

impl FromStr for Class {
    type Err = BayesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Class::Zero),
            "1" => Ok(Class::One),
            other => Err(BayesError::InvalidLabel(other.to_string())),
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Class::Zero => "0",
            Class::One => "1",
        })
    }
}

/// A value for each class, indexed by `Class`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerClass<T>([T; 2]);

impl<T> PerClass<T> {
    pub fn from_fn<F: FnMut(Class) -> T>(mut f: F) -> Self {
        PerClass([f(Class::Zero), f(Class::One)])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Class, &T)> {
        Class::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Class> for PerClass<T> {
    type Output = T;

    fn index(&self, class: Class) -> &T {
        &self.0[class.slot()]
    }
}

impl<T> IndexMut<Class> for PerClass<T> {
    fn index_mut(&mut self, class: Class) -> &mut T {
        &mut self.0[class.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_labels() {
        assert_eq!("0".parse::<Class>().unwrap(), Class::Zero);
        assert_eq!(" 1 ".parse::<Class>().unwrap(), Class::One);
    }

    #[test]
    fn rejects_third_label() {
        let err = "2".parse::<Class>().unwrap_err();
        assert!(matches!(err, BayesError::InvalidLabel(label) if label == "2"));
        assert!("".parse::<Class>().is_err());
        assert!("one".parse::<Class>().is_err());
    }

    #[test]
    fn displays_identifier() {
        assert_eq!(Class::Zero.to_string(), "0");
        assert_eq!(Class::One.to_string(), "1");
    }

    #[test]
    fn per_class_indexing() {
        let mut table = PerClass::from_fn(|class| class.to_string());
        assert_eq!(table[Class::Zero], "0");
        table[Class::One].push('!');
        assert_eq!(table[Class::One], "1!");

        let classes: Vec<Class> = table.iter().map(|(class, _)| class).collect();
        assert_eq!(classes, Class::ALL);
    }
}
