#![forbid(unsafe_code)]
#![doc = "PIN protection for remote verifiers: PIN blocks sealed with RSA-OAEP."]

pub mod pin;
