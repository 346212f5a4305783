//! Wire types shared between the cash-flow server and the browser module.

pub mod shared;
pub mod usecases;
