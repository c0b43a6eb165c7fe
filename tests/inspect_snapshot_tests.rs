//! Snapshot tests for rendered aggregates.
//!
//! Review changes: `cargo insta review`

use reflection::{Reflect, inspect, inspect_all};

#[derive(Reflect)]
struct Person {
    name: &'static str,
    email: String,
    age: u32,
}

#[derive(Clone, Copy, PartialEq, Reflect)]
enum Status {
    Active,
    Suspended,
}

#[derive(Reflect)]
struct Address {
    city: String,
    zip: Option<u32>,
}

#[derive(Reflect)]
struct Account {
    owner: Person,
    status: Status,
    address: Address,
    initial: char,
    tags: Vec<&'static str>,
    balance: f64,
}

#[derive(Reflect)]
struct Nothing;

fn people() -> Vec<Person> {
    vec![
        Person {
            name: "John Doe",
            email: "john@doe.com".into(),
            age: 42,
        },
        Person {
            name: "Jane Doe",
            email: "jane@doe.com".into(),
            age: 43,
        },
    ]
}

#[test]
fn flat_record() {
    let person = &people()[0];
    insta::assert_snapshot!(inspect(person), @r#"name="John Doe" email="john@doe.com" age=42"#);
}

#[test]
fn nested_record() {
    let account = Account {
        owner: people().remove(1),
        status: Status::Suspended,
        address: Address {
            city: "Utrecht".into(),
            zip: None,
        },
        initial: 'J',
        tags: vec!["vip", "beta"],
        balance: 12.5,
    };
    insta::assert_snapshot!(
        inspect(&account),
        @r#"owner={name="Jane Doe" email="jane@doe.com" age=43} status=Suspended address={city="Utrecht" zip=None} initial="J" tags=["vip", "beta"] balance=12.5"#
    );
}

#[test]
fn strings_are_not_escaped() {
    let person = Person {
        name: "Bobby \"Tables\"",
        email: String::new(),
        age: 0,
    };
    insta::assert_snapshot!(inspect(&person), @r#"name="Bobby "Tables"" email="" age=0"#);
}

#[test]
fn every_line_is_terminated() {
    let rendered = inspect_all(&people());
    assert!(rendered.ends_with('\n'));
    insta::assert_debug_snapshot!(
        rendered.lines().collect::<Vec<_>>(),
        @r#"
    [
        "name=\"John Doe\" email=\"john@doe.com\" age=42",
        "name=\"Jane Doe\" email=\"jane@doe.com\" age=43",
    ]
    "#
    );
}

#[test]
fn empty_inputs_render_empty() {
    assert_eq!(inspect(&Nothing), "");
    assert_eq!(inspect_all::<Person>(&[]), "");
    assert_eq!(inspect_all(&[Nothing, Nothing]), "\n\n");
}
