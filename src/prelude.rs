pub use serde::{Deserialize, Serialize};

pub use std::fmt;
pub use std::io::Write;

pub use ndarray::prelude::*;
pub use ndarray_rand::rand_distr::StandardNormal;
pub use ndarray_rand::RandomExt;
pub use rand::rngs::StdRng;
pub use rand::{Rng, SeedableRng};

pub use crate::config::*;
pub use crate::error::*;
pub use crate::functional::*;
pub use crate::init::*;
pub use crate::nn::*;
pub use crate::optimizers::*;
pub use crate::trainer::*;
pub use crate::utils::*;

pub use crate::normal_array;
pub use crate::params;
