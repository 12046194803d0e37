pub mod fk;
pub mod ik;
pub mod jacobian;
