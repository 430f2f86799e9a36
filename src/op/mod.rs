// Copyright (C) Microsoft Corporation. All rights reserved.

//! Operation contracts shared by the context families.
//!
//! The traits in this module describe the lifecycle every digest-producing
//! context obeys, independent of whether the context is keyed. Concrete
//! context types live in the algorithm modules and implement these
//! contracts.

mod digest;

pub use digest::*;

use super::*;
