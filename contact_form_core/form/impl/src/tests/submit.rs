use std::sync::Arc;

use contact_form_core_form_contracts::{FormFeatureService, FormSubmitError};
use contact_form_demo::{FORM_ID_1, INVALID_EMAIL, JIMMY, JIMMY_WITH_MESSAGE, MESSAGE};
use contact_form_models::form::{Field, FormValues};
use contact_form_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{
    tests::{sut, sut_with_config, Sut},
    FormFeatureConfig,
};

async fn fill(sut: &Sut, values: &FormValues) {
    for field in Field::ALL {
        let value = values.get(field);
        if !value.is_empty() {
            sut.change(*FORM_ID_1, field, value.into()).await.unwrap();
        }
    }
}

#[tokio::test]
async fn empty_form() {
    // Arrange
    let sut = sut(Some(*FORM_ID_1));
    sut.mount().await;

    // Act
    let result = sut.submit(*FORM_ID_1).await;

    // Assert
    assert_matches!(
        result,
        Err(FormSubmitError::Invalid(view)) if view.errors().count() == 3 && view.summary.is_none()
    );
}

#[tokio::test]
async fn missing_email() {
    // Arrange
    let sut = sut(Some(*FORM_ID_1));
    sut.mount().await;
    fill(
        &sut,
        &FormValues {
            email: String::new(),
            ..JIMMY.clone()
        },
    )
    .await;

    // Act
    let result = sut.submit(*FORM_ID_1).await;

    // Assert
    let Err(FormSubmitError::Invalid(view)) = result else {
        panic!("expected submission to be rejected");
    };
    assert_eq!(
        view.errors()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>(),
        ["email is a required field"]
    );
}

#[tokio::test]
async fn invalid_email() {
    // Arrange
    let sut = sut(Some(*FORM_ID_1));
    sut.mount().await;
    fill(
        &sut,
        &FormValues {
            email: INVALID_EMAIL.into(),
            ..JIMMY.clone()
        },
    )
    .await;

    // Act
    let result = sut.submit(*FORM_ID_1).await;

    // Assert
    let Err(FormSubmitError::Invalid(view)) = result else {
        panic!("expected submission to be rejected");
    };
    assert_eq!(
        view.find_by_test_id("emailError"),
        Some("email must be a valid email address")
    );
    assert_eq!(view.errors().count(), 1);
}

#[tokio::test]
async fn without_message() {
    // Arrange
    let sut = sut(Some(*FORM_ID_1));
    sut.mount().await;
    fill(&sut, &JIMMY).await;

    // Act
    let result = sut.submit(*FORM_ID_1).await;

    // Assert
    let view = result.unwrap();
    assert_eq!(view.find_by_test_id("firstnameDisplay"), Some("Jimmy"));
    assert_eq!(view.find_by_test_id("lastnameDisplay"), Some("Neutron"));
    assert_eq!(
        view.find_by_test_id("emailDisplay"),
        Some("jimmyn736@gmail.com")
    );
    assert_eq!(view.find_by_test_id("messageDisplay"), None);
}

#[tokio::test]
async fn all_fields() {
    // Arrange
    let sut = sut(Some(*FORM_ID_1));
    sut.mount().await;
    fill(&sut, &JIMMY_WITH_MESSAGE).await;

    // Act
    let result = sut.submit(*FORM_ID_1).await;

    // Assert
    let view = result.unwrap();
    assert_eq!(view.find_by_test_id("messageDisplay"), Some(MESSAGE));
    assert_eq!(view.summary.unwrap().entries.len(), 4);
}

#[tokio::test]
async fn resubmit() {
    // Arrange
    let sut = sut(Some(*FORM_ID_1));
    sut.mount().await;
    fill(&sut, &JIMMY_WITH_MESSAGE).await;
    let first = sut.submit(*FORM_ID_1).await.unwrap();

    // Act
    let result = sut.submit(*FORM_ID_1).await;

    // Assert
    assert_eq!(result.unwrap(), first);
}

#[tokio::test]
async fn rejected_submission_keeps_previous_summary() {
    // Arrange
    let sut = sut(Some(*FORM_ID_1));
    sut.mount().await;
    fill(&sut, &JIMMY).await;
    sut.submit(*FORM_ID_1).await.unwrap();
    sut.change(*FORM_ID_1, Field::Email, INVALID_EMAIL.into())
        .await
        .unwrap();

    // Act
    let result = sut.submit(*FORM_ID_1).await;

    // Assert
    let Err(FormSubmitError::Invalid(view)) = result else {
        panic!("expected submission to be rejected");
    };
    assert_eq!(
        view.find_by_test_id("emailDisplay"),
        Some("jimmyn736@gmail.com")
    );
    assert_eq!(
        view.find_by_test_id("emailError"),
        Some("email must be a valid email address")
    );
}

#[tokio::test]
async fn reset_on_submit() {
    // Arrange
    let sut = sut_with_config(
        Some(*FORM_ID_1),
        FormFeatureConfig {
            reset_on_submit: true,
            ..Default::default()
        },
    );
    sut.mount().await;
    fill(&sut, &JIMMY).await;

    // Act
    let result = sut.submit(*FORM_ID_1).await;

    // Assert
    let view = result.unwrap();
    assert!(view.inputs.iter().all(|input| input.value.is_empty()));
    assert_eq!(view.errors().count(), 0);
    assert_eq!(view.find_by_test_id("firstnameDisplay"), Some("Jimmy"));
}

#[tokio::test]
async fn not_found() {
    // Arrange
    let sut = sut(None);

    // Act
    let result = sut.submit(*FORM_ID_1).await;

    // Assert
    assert_matches!(result, Err(FormSubmitError::NotFound));
}

#[tokio::test]
async fn submit_values() {
    // Arrange
    let sut = sut(Some(*FORM_ID_1));
    sut.mount().await;

    // Act
    let result = sut.submit_values(*FORM_ID_1, JIMMY_WITH_MESSAGE.clone()).await;

    // Assert
    let view = result.unwrap();
    assert_eq!(view.errors().count(), 0);
    assert_eq!(view.find_by_test_id("firstnameDisplay"), Some("Jimmy"));
    assert_eq!(view.find_by_test_id("messageDisplay"), Some(MESSAGE));
    assert_eq!(view.input(Field::Email).unwrap().value, JIMMY.email);
}

#[tokio::test]
async fn submit_values_overwrites_previous_inputs() {
    // Arrange
    let sut = sut(Some(*FORM_ID_1));
    sut.mount().await;
    fill(&sut, &JIMMY_WITH_MESSAGE).await;
    let values = FormValues {
        email: INVALID_EMAIL.into(),
        ..JIMMY.clone()
    };

    // Act
    let result = sut.submit_values(*FORM_ID_1, values).await;

    // Assert
    let Err(FormSubmitError::Invalid(view)) = result else {
        panic!("expected submission to be rejected");
    };
    assert_eq!(view.input(Field::Message).unwrap().value, "");
    assert_eq!(
        view.find_by_test_id("emailError"),
        Some("email must be a valid email address")
    );
}

#[tokio::test]
async fn submit_values_not_found() {
    // Arrange
    let sut = sut(None);

    // Act
    let result = sut.submit_values(*FORM_ID_1, JIMMY.clone()).await;

    // Assert
    assert_matches!(result, Err(FormSubmitError::NotFound));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_submit_values_never_mix() {
    // Arrange
    let sut = Arc::new(sut(Some(*FORM_ID_1)));
    sut.mount().await;
    let cindy = FormValues {
        first_name: "Cindy".into(),
        last_name: "Vortex".into(),
        email: "cindy@example.com".into(),
        message: String::new(),
    };

    // Act
    let tasks = (0..64)
        .map(|i| {
            let sut = Arc::clone(&sut);
            let values = if i % 2 == 0 {
                JIMMY.clone()
            } else {
                cindy.clone()
            };
            tokio::spawn(async move { sut.submit_values(*FORM_ID_1, values).await })
        })
        .collect::<Vec<_>>();

    // Assert
    for task in tasks {
        let view = task.await.unwrap().unwrap();
        let names = (
            view.find_by_test_id("firstnameDisplay"),
            view.find_by_test_id("lastnameDisplay"),
            view.find_by_test_id("emailDisplay"),
        );
        assert!(
            matches!(
                names,
                (Some("Jimmy"), Some("Neutron"), Some("jimmyn736@gmail.com"))
                    | (Some("Cindy"), Some("Vortex"), Some("cindy@example.com"))
            ),
            "{names:?}"
        );
    }
}
