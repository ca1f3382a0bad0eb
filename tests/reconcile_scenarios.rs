//! Reconciliation scenarios over the pure repair logic
//!
//! The routines themselves run against a live database; these tests cover the
//! decision logic they are built from: which references count as dangling,
//! what a synthesized placeholder looks like, and how the dual-form
//! identifier lookup resolves.

use campuseats_dbtools::model::{alternate_form, Canteen, CanteenStatus};
use campuseats_dbtools::reconcile::dangling_references;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, from_document, to_document, Bson};

#[test]
fn missing_canteen_gets_placeholder_with_derived_name() {
    // A menu item references "abc123" but no such canteen exists.
    let known: Vec<Bson> = vec![];
    let referenced = vec![Bson::String("abc123".into())];
    let dangling = dangling_references(&referenced, &known);
    assert_eq!(dangling, referenced);

    let placeholder = Canteen::placeholder(dangling[0].clone());
    let doc = to_document(&placeholder).unwrap();
    assert_eq!(doc.get_str("_id").unwrap(), "abc123");
    assert_eq!(doc.get_str("canteenName").unwrap(), "Canteen abc1");
    assert_eq!(doc.get_str("status").unwrap(), "APPROVED");
    assert_eq!(doc.get_bool("active").unwrap(), true);
    assert_eq!(doc.get_bool("verified").unwrap(), true);
    assert_eq!(doc.get_f64("rating").unwrap(), 4.0);
    assert_eq!(doc.get_i64("totalRatings").unwrap(), 1);
}

#[test]
fn second_pass_finds_no_dangling_references() {
    // After repair the synthesized identifier is part of the key set, so a
    // re-run synthesizes nothing.
    let referenced = vec![Bson::String("abc123".into())];
    let known: Vec<Bson> = dangling_references(&referenced, &[])
        .into_iter()
        .map(|id| Canteen::placeholder(id).id)
        .collect();
    assert!(dangling_references(&referenced, &known).is_empty());
}

#[test]
fn string_reference_resolves_to_object_id_keyed_canteen() {
    // The repairer's second lookup step converts between the two stored
    // identifier forms.
    let stored = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
    let reference = Bson::String("507f1f77bcf86cd799439011".into());
    assert_eq!(alternate_form(&reference), Some(Bson::ObjectId(stored)));

    // A reference that is not a valid ObjectId hex has no alternate form and
    // stays "not found" without an error.
    assert_eq!(alternate_form(&Bson::String("abc123".into())), None);
}

#[test]
fn pending_inactive_canteen_fails_visibility_until_flags_are_set() {
    let mut canteen: Canteen = from_document(doc! {
        "_id": "c9",
        "canteenName": "South Mess",
        "status": "PENDING",
        "active": false,
    })
    .unwrap();
    assert!(!canteen.is_visible());

    // The bulk visibility update sets exactly these three fields.
    canteen.status = Some(CanteenStatus::Approved);
    canteen.active = Some(true);
    canteen.verified = Some(true);
    assert!(canteen.is_visible());
}

#[test]
fn string_prep_time_is_reported_and_replaced_by_constant() {
    let canteen: Canteen = from_document(doc! {
        "_id": "c1",
        "canteenName": "North Mess",
        "averagePreparationTime": "twenty",
    })
    .unwrap();
    assert_eq!(canteen.prep_time_raw_string(), Some("twenty"));
    assert_eq!(
        campuseats_dbtools::model::DEFAULT_PREP_TIME_MINUTES,
        15
    );

    // Once numeric, the record no longer matches the string-type filter.
    let fixed: Canteen = from_document(doc! {
        "_id": "c1",
        "averagePreparationTime": 15,
    })
    .unwrap();
    assert_eq!(fixed.prep_time_raw_string(), None);
    assert_eq!(fixed.prep_time_minutes(), Some(15));
}
