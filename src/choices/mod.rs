pub use self::input::*;

pub(crate) mod input;

/// Trait for types that provide a human-readable description
///
/// Used to show enum variants in menus with friendly text instead of the
/// variant names.
pub trait Description {
    /// Returns a static string description of the implementing type
    fn description(&self) -> &'static str;
}

/// Creates enums the user can pick a variant of on the CLI
///
/// This macro generates:
/// 1. An enum with the given variants
/// 2. Debug, Copy, Clone, Ord/PartialOrd and Eq/PartialEq
/// 3. A [`Description`] implementation
/// 4. A Display implementation showing the description
///
/// # Syntax
/// `choice!(EnumName, Variant => "Description", ...)`
///
/// # Example
/// ```ignore
/// choice!(Shape,
///     Square => "Square - Points on an integer lattice",
///     Disc => "Disc - Points scattered inside a circle"
/// );
///
/// let shape = Shape::choice("Which shape should the points form?")?;
/// ```
#[macro_export]
macro_rules! choice {
    ($enum_name:ident, $($variant:ident => $desc:expr),+) => {
        #[derive(Debug, Copy, Clone, inquiry::Choice, Ord, PartialOrd, Eq, PartialEq)]
        pub enum $enum_name {
            $($variant,)+
        }

        impl Description for $enum_name {
            fn description(&self) -> &'static str {
                match self {
                    $($enum_name::$variant => $desc),+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.description())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menus_show_descriptions() {
        assert_eq!(
            Execution::Parallel.to_string(),
            "Parallel - Split large searches across threads"
        );
        assert!(InputSource::Random.description().starts_with("Random"));
    }
}
