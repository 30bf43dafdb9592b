use nutype::nutype;

use crate::macros::nutype_string;

nutype_string!(FirstName(validate(
    not_empty,
    len_char_min = FirstName::MIN_LENGTH
)));
impl FirstName {
    pub const MIN_LENGTH: usize = 5;
}

nutype_string!(LastName(validate(not_empty)));

/// The free text of a contact message. It is optional and never validated.
#[nutype(derive(Debug, Clone, PartialEq, Eq, Hash, Deref, From, Serialize, Deserialize))]
pub struct Message(String);
