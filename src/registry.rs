//! Default generators by type
//!
//! Every type implementing [`Arbitrary`] has a built-in rule for its default
//! generator. Composite rules (tuples, [`Pair`]) resolve their components
//! through the same [`Registry`] they were asked from, so overriding the
//! default for a component type changes every composite built on it.
//!
//! A registry is an ordinary value. Tests that need custom defaults build
//! their own and pass it around; the registry behind [`arbitrary`] is empty
//! and can never be mutated.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use crate::error::{GenError, GenResult};
use crate::gen::{self, pair, tuple, Gen, Pair};

/// Types with a default generator
pub trait Arbitrary: Clone + 'static {
    fn arbitrary(registry: &Registry) -> Gen<Self>;
}

/// Overrides for the default generator of individual types
#[derive(Default)]
pub struct Registry {
    overrides: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `gen` as the default generator for `T`, replacing any
    /// previous override
    pub fn register<T: Clone + 'static>(&mut self, gen: Gen<T>) {
        log::debug!("Registering default generator for {}", std::any::type_name::<T>());
        self.overrides.insert(TypeId::of::<T>(), Box::new(gen));
    }

    pub fn with<T: Clone + 'static>(mut self, gen: Gen<T>) -> Self {
        self.register(gen);
        self
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.overrides.contains_key(&TypeId::of::<T>())
    }

    /// The registered override for `T`, ignoring built-in rules
    pub fn lookup<T: Clone + 'static>(&self) -> GenResult<Gen<T>> {
        self.overrides
            .get(&TypeId::of::<T>())
            .and_then(|gen| gen.downcast_ref::<Gen<T>>())
            .cloned()
            .ok_or(GenError::NoDefault {
                type_name: std::any::type_name::<T>(),
            })
    }

    /// The default generator for `T`: its override if one is registered,
    /// otherwise the type's own rule
    pub fn arbitrary<T: Arbitrary>(&self) -> Gen<T> {
        match self.lookup::<T>() {
            Ok(gen) => gen,
            Err(_) => {
                log::trace!("Using built-in default for {}", std::any::type_name::<T>());
                T::arbitrary(self)
            }
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("overrides", &self.overrides.len())
            .finish()
    }
}

lazy_static::lazy_static! {
    static ref DEFAULT_REGISTRY: Registry = Registry::new();
}

/// The built-in default generator for `T`
pub fn arbitrary<T: Arbitrary>() -> Gen<T> {
    DEFAULT_REGISTRY.arbitrary::<T>()
}

macro_rules! arbitrary_integer {
    ($($t:ty),*) => {
        $(
            impl Arbitrary for $t {
                fn arbitrary(_: &Registry) -> Gen<Self> {
                    gen::integer::<$t>()
                }
            }
        )*
    };
}

arbitrary_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Arbitrary for bool {
    fn arbitrary(_: &Registry) -> Gen<Self> {
        gen::boolean()
    }
}

impl Arbitrary for char {
    fn arbitrary(_: &Registry) -> Gen<Self> {
        gen::character()
    }
}

impl Arbitrary for String {
    fn arbitrary(_: &Registry) -> Gen<Self> {
        gen::string()
    }
}

macro_rules! arbitrary_tuple {
    ($($T:ident),*) => {
        impl<$($T: Arbitrary),*> Arbitrary for ($($T,)*) {
            #[allow(unused_variables)]
            fn arbitrary(registry: &Registry) -> Gen<Self> {
                tuple(($(registry.arbitrary::<$T>(),)*))
            }
        }
    };
}

arbitrary_tuple!();
arbitrary_tuple!(A);
arbitrary_tuple!(A, B);
arbitrary_tuple!(A, B, C);
arbitrary_tuple!(A, B, C, D);
arbitrary_tuple!(A, B, C, D, E);
arbitrary_tuple!(A, B, C, D, E, F);
arbitrary_tuple!(A, B, C, D, E, F, G);
arbitrary_tuple!(A, B, C, D, E, F, G, H);
arbitrary_tuple!(A, B, C, D, E, F, G, H, I);
arbitrary_tuple!(A, B, C, D, E, F, G, H, I, J);
arbitrary_tuple!(A, B, C, D, E, F, G, H, I, J, K);
arbitrary_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);

impl<A: Arbitrary, B: Arbitrary> Arbitrary for Pair<A, B> {
    fn arbitrary(registry: &Registry) -> Gen<Self> {
        pair(registry.arbitrary::<A>(), registry.arbitrary::<B>())
    }
}
