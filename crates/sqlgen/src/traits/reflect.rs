use crate::{model::kind::Kind, traits::Reflect};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::Arc,
};

// impl_reflect
macro_rules! impl_reflect {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl Reflect for $type {
                fn kind() -> Kind {
                    Kind::$variant
                }
            }
        )*
    };
}

impl_reflect!(
    bool => Bool,
    char => Char,
    f32 => Float,
    f64 => Float,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    i128 => Int,
    isize => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    u128 => Uint,
    usize => Uint,
    str => Text,
    String => Text,
    () => Unit,
);

// impl_reflect_ref
// pointer-like wrappers are one level of indirection
macro_rules! impl_reflect_ref {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $type {
                fn kind() -> Kind {
                    Kind::Ref(Box::new(T::kind()))
                }
            }
        )*
    };
}

impl_reflect_ref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

// impl_reflect_list
macro_rules! impl_reflect_list {
    ( $( $type:ty ),* $(,)? ) => {
        $(
            impl<T: Reflect> Reflect for $type {
                fn kind() -> Kind {
                    Kind::List(Box::new(T::kind()))
                }
            }
        )*
    };
}

impl_reflect_list!([T], Vec<T>, VecDeque<T>, BTreeSet<T>, HashSet<T>);

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn kind() -> Kind {
        Kind::List(Box::new(T::kind()))
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn kind() -> Kind {
        Kind::Option(Box::new(T::kind()))
    }
}

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
    fn kind() -> Kind {
        Kind::Map {
            key: Box::new(K::kind()),
            value: Box::new(V::kind()),
        }
    }
}

impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
    fn kind() -> Kind {
        Kind::Map {
            key: Box::new(K::kind()),
            value: Box::new(V::kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_map_to_scalar_kinds() {
        assert_eq!(i32::kind(), Kind::Int);
        assert_eq!(u64::kind(), Kind::Uint);
        assert_eq!(String::kind(), Kind::Text);
        assert_eq!(<str>::kind(), Kind::Text);
        assert_eq!(<()>::kind(), Kind::Unit);
    }

    #[test]
    fn pointers_wrap_their_target() {
        assert_eq!(<&i32>::kind(), Kind::Ref(Box::new(Kind::Int)));
        assert_eq!(<Box<str>>::kind(), Kind::Ref(Box::new(Kind::Text)));
        assert_eq!(
            <&Arc<bool>>::kind(),
            Kind::Ref(Box::new(Kind::Ref(Box::new(Kind::Bool))))
        );
    }

    #[test]
    fn containers_carry_element_kinds() {
        assert_eq!(<Vec<u8>>::kind(), Kind::List(Box::new(Kind::Uint)));
        assert_eq!(<[char; 2]>::kind(), Kind::List(Box::new(Kind::Char)));
        assert_eq!(<Option<f64>>::kind(), Kind::Option(Box::new(Kind::Float)));
        assert_eq!(
            <BTreeMap<String, i64>>::kind(),
            Kind::Map {
                key: Box::new(Kind::Text),
                value: Box::new(Kind::Int),
            }
        );
    }

    #[test]
    fn non_record_kinds_resolve_no_model() {
        assert!(i32::kind().record().is_none());
        assert!(<&i32>::kind().record().is_none());
        assert!(<Vec<String>>::kind().record().is_none());
    }
}
