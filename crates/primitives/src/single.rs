//! Single-value states and props
//!
//! Each type holds one optional value and exposes it as its only member.
//! They cover simple components and thin wrappers around other components.
//! `IntState` doubles as props.

use std::borrow::Cow;

use ownstate_core::{MemberValue, OwnProps, OwnState};
use serde::{Deserialize, Serialize};

macro_rules! single_value {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            /// The wrapped value, `None` when absent
            pub value: Option<$ty>,
        }

        impl $name {
            /// Wrap a value (or `None`)
            pub fn new(value: impl Into<Option<$ty>>) -> Self {
                Self {
                    value: value.into(),
                }
            }

            /// The wrapped value
            pub fn value(&self) -> Option<&$ty> {
                self.value.as_ref()
            }
        }

        impl OwnState for $name {
            fn members(&self) -> Vec<MemberValue> {
                vec![self.value.clone().into()]
            }
        }
    };
}

macro_rules! single_value_props {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        single_value!($(#[$doc])* $name, $ty);

        impl OwnProps for $name {}
    };
}

single_value!(
    /// `i32` own state
    IntState,
    i32
);
single_value!(
    /// `i64` own state
    LongState,
    i64
);
single_value!(
    /// `bool` own state
    BooleanState,
    bool
);
single_value!(
    /// `f64` own state
    DoubleState,
    f64
);
single_value!(
    /// `String` own state
    StringState,
    String
);
single_value!(
    /// Text own state that can borrow static text
    CharSequenceState,
    Cow<'static, str>
);

impl OwnProps for IntState {}

single_value_props!(
    /// `i32` props
    IntProps,
    i32
);
single_value_props!(
    /// `i64` props
    LongProps,
    i64
);
single_value_props!(
    /// `bool` props
    BooleanProps,
    bool
);
single_value_props!(
    /// `f64` props
    DoubleProps,
    f64
);
single_value_props!(
    /// `String` props
    StringProps,
    String
);
single_value_props!(
    /// Text props that can borrow static text
    CharSequenceProps,
    Cow<'static, str>
);

impl From<&str> for StringState {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl From<&str> for StringProps {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl From<&'static str> for CharSequenceState {
    fn from(s: &'static str) -> Self {
        Self::new(Cow::Borrowed(s))
    }
}

impl From<String> for CharSequenceState {
    fn from(s: String) -> Self {
        Self::new(Cow::Owned(s))
    }
}

impl From<&'static str> for CharSequenceProps {
    fn from(s: &'static str) -> Self {
        Self::new(Cow::Borrowed(s))
    }
}

impl From<String> for CharSequenceProps {
    fn from(s: String) -> Self {
        Self::new(Cow::Owned(s))
    }
}
