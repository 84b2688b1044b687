//! Small arithmetic helpers shared by the half and round modules.

pub mod modular;
