//! Fixtures shared by the tests of the workspace.

use std::sync::LazyLock;

use contact_form_models::{
    contact::{FirstName, LastName, Message},
    form::{FormId, FormValues, SubmittedRecord},
};
use uuid::{uuid, Uuid};

pub const UUID1: Uuid = uuid!("eb1cd87a-4475-4d68-a2c2-0216bdaac8f7");

pub static FORM_ID_1: LazyLock<FormId> = LazyLock::new(|| UUID1.into());

pub const SHORT_FIRST_NAME: &str = "Jim";
pub const INVALID_EMAIL: &str = "jimmyn736";
pub const MESSAGE: &str = "Goddard, self destruct!";

/// Valid values without a message.
pub static JIMMY: LazyLock<FormValues> = LazyLock::new(|| FormValues {
    first_name: "Jimmy".into(),
    last_name: "Neutron".into(),
    email: "jimmyn736@gmail.com".into(),
    message: String::new(),
});

/// Valid values with all four fields populated.
pub static JIMMY_WITH_MESSAGE: LazyLock<FormValues> = LazyLock::new(|| FormValues {
    message: MESSAGE.into(),
    ..JIMMY.clone()
});

pub static JIMMY_RECORD: LazyLock<SubmittedRecord> = LazyLock::new(|| record(&JIMMY));

pub static JIMMY_WITH_MESSAGE_RECORD: LazyLock<SubmittedRecord> =
    LazyLock::new(|| record(&JIMMY_WITH_MESSAGE));

fn record(values: &FormValues) -> SubmittedRecord {
    SubmittedRecord {
        first_name: FirstName::try_new(values.first_name.clone()).unwrap(),
        last_name: LastName::try_new(values.last_name.clone()).unwrap(),
        email: values.email.parse().unwrap(),
        message: Message::new(values.message.clone()),
    }
}
