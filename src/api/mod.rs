//! Response envelopes and pagination shared by public and admin routes.

pub mod pagination;
pub mod response;
