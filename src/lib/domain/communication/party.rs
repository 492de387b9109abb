//! Which side of an email a field belongs to

use std::fmt;

/// The party a name or address field describes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Party {
    /// The sender of the email
    Sender,

    /// The receiver of the email
    Receiver,
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Sender => write!(f, "sender"),
            Party::Receiver => write!(f, "receiver"),
        }
    }
}
