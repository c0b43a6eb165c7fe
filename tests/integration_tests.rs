//! End-to-end tests of the public reflection API on derived types.

use std::borrow::Cow;

use reflection::{
    Aggregate, EnumReflect, IndexMask, MemberAt, MemberType, MemberTypeOf, MemberTypeVisitor, MemberValues, Reflect,
    ReflectionError, call_on_members, collect_differences, collect_differences_by_index, differences, enum_name,
    enum_variant_names, enumerate_member_types, enumerate_member_types_in, enumerate_members, enumerate_members_in,
    fold_member_types, fold_members, full_type_name_of, get_member_at, get_member_at_mut, into_tuple, member,
    member_index, member_index_of, name_of, to_tuple, to_tuple_mut, try_type_name_of, type_name_of,
};

#[derive(Debug, Clone, PartialEq, Reflect)]
struct Person {
    name: &'static str,
    email: String,
    age: u32,
}

fn john() -> Person {
    Person {
        name: "John Doe",
        email: "john@doe.com".into(),
        age: 42,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Reflect)]
struct Point(i32, i32);

// =============================================================================
// Decomposition
// =============================================================================

mod decompose {
    use super::*;

    #[test]
    fn shared_tuple_borrows_members_in_order() {
        let person = john();
        let (name, email, age) = to_tuple(&person);
        assert_eq!(*name, "John Doe");
        assert_eq!(email, "john@doe.com");
        assert_eq!(*age, 42);
    }

    #[test]
    fn mutable_tuple_writes_through() {
        let mut person = john();
        let (_, email, age) = to_tuple_mut(&mut person);
        email.push_str(".org");
        *age += 1;
        assert_eq!(person.email, "john@doe.com.org");
        assert_eq!(person.age, 43);
    }

    #[test]
    fn owned_tuple_moves_members_out() {
        let (name, email, age) = into_tuple(john());
        assert_eq!((name, email.as_str(), age), ("John Doe", "john@doe.com", 42));

        let (x, y) = Point(3, -4).into_tuple();
        assert_eq!((x, y), (3, -4));
    }

    #[test]
    fn indexed_access_is_typed() {
        let mut person = john();
        let age: &MemberTypeOf<Person, 2> = get_member_at::<2, _>(&person);
        assert_eq!(*age, 42);

        *get_member_at_mut::<0, _>(&mut person) = "Jane Doe";
        assert_eq!(person.name, "Jane Doe");
        assert_eq!(<Person as MemberAt<1>>::NAME, "email");
    }

    #[test]
    fn dynamic_access_stops_after_the_last_member() {
        let person = john();
        assert_eq!(person.member(2).and_then(|age| age.downcast_ref::<u32>()), Some(&42));
        assert!(person.member(3).is_none());
    }
}

// =============================================================================
// Names
// =============================================================================

mod names {
    use super::*;

    #[test]
    fn enumerator_names() {
        assert_eq!(enum_name(&Color::Red), "Red");
        assert_eq!(enum_name(&Color::Green), "Green");
        assert_eq!(Color::Blue.variant_name(), "Blue");
        assert_eq!(enum_variant_names::<Color>(), ["Red", "Green", "Blue"]);
        assert_eq!(Color::Blue.variant_index(), 2);
        assert_eq!(Color::from_variant_name("Green"), Some(&Color::Green));
        assert_eq!(Color::from_variant_name("Purple"), None);
        assert_eq!(<Color as EnumReflect>::TYPE_NAME, "Color");
    }

    #[test]
    fn type_names_are_source_level() {
        assert_eq!(type_name_of::<Person>(), "Person");
        assert_eq!(type_name_of::<Vec<Person>>(), "Vec<Person>");
        assert_eq!(type_name_of::<Option<&Color>>(), "Option<&Color>");
        assert_eq!(type_name_of::<u64>(), "u64");
        assert_eq!(full_type_name_of::<Person>(), Ok("integration_tests::Person"));
        assert_eq!(<Person as Aggregate>::TYPE_NAME, "Person");
    }

    #[test]
    fn a_type_spelled_like_the_fixture_collides() {
        #[allow(dead_code)]
        struct ReflectionCalibrationFixture;

        let err = try_type_name_of::<ReflectionCalibrationFixture>().unwrap_err();
        assert!(matches!(err, ReflectionError::AnchorCollision { .. }), "{err}");
        // The infallible variant still produces something readable.
        assert_eq!(type_name_of::<ReflectionCalibrationFixture>(), "ReflectionCalibrationFixture");
    }
}

// =============================================================================
// Member pointers
// =============================================================================

mod member_pointers {
    use super::*;
    use reflection::{MemberClassOf, MemberOf, MemberPtr};

    const AGE: MemberPtr<Person, u32> = member!(Person, age);

    #[test]
    fn index_and_name() {
        assert_eq!(AGE.index(), Some(2));
        assert_eq!(member_index_of(&AGE), Ok(2));
        assert_eq!(name_of(&AGE), "age");
        assert_eq!(member_index!(Person, email), 1);
        assert_eq!(member_index!(Point, 1), 1);
    }

    #[test]
    fn pointers_access_the_member() {
        let mut person = john();
        assert_eq!(*AGE.get(&person), 42);
        *AGE.get_mut(&mut person) = 7;
        assert_eq!(person.age, 7);
    }

    #[test]
    fn projections_name_the_class_and_member_types() {
        let class: Cow<'static, str> = type_name_of::<MemberClassOf<MemberPtr<Person, u32>>>();
        let member: Cow<'static, str> = type_name_of::<MemberOf<MemberPtr<Person, u32>>>();
        assert_eq!((class.as_ref(), member.as_ref()), ("Person", "u32"));
    }

    #[test]
    fn unknown_member_is_reported() {
        let bogus = MemberPtr::<Person, u32>::new("height", |p| &p.age, |p| &mut p.age);
        assert_eq!(bogus.index(), None);
        assert_eq!(
            member_index_of(&bogus),
            Err(ReflectionError::MemberNotFound {
                class: "Person",
                member: "height",
            })
        );
    }
}

// =============================================================================
// Enumeration and folds
// =============================================================================

#[derive(Reflect)]
struct Five {
    a: u8,
    b: u16,
    c: u32,
    d: u64,
    e: Vec<Person>,
}

#[derive(Reflect)]
struct Triple {
    x: i32,
    y: i32,
    z: i32,
}

mod traversal {
    use super::*;

    #[test]
    fn enumerate_members_visits_every_index_in_order() {
        let mut seen = Vec::new();
        enumerate_members(&john(), |index, value| seen.push((index, value.to_string())));
        assert_eq!(
            seen,
            [
                (0, "\"John Doe\"".to_string()),
                (1, "\"john@doe.com\"".to_string()),
                (2, "42".to_string())
            ]
        );
    }

    #[test]
    fn masks_restrict_and_order_the_visit() {
        const MASK: IndexMask<Person, 2> = IndexMask::new([2, 0]);
        let mut seen = Vec::new();
        enumerate_members_in(&john(), MASK, |index, _| seen.push(index));
        assert_eq!(seen, [2, 0]);

        let mut names = Vec::new();
        enumerate_member_types_in(MASK, |member| names.push(member.name));
        assert_eq!(names, ["age", "name"]);
    }

    #[test]
    fn member_types_describe_each_member() {
        let mut types = Vec::new();
        enumerate_member_types::<Five, _>(|member| types.push(member));
        assert_eq!(types.len(), 5);
        assert_eq!(
            types[4],
            MemberType {
                index: 4,
                name: "e",
                type_name: Cow::Borrowed("Vec<Person>"),
            }
        );
    }

    #[test]
    fn typed_visitor_sees_member_types() {
        struct SizeOf(usize);

        impl MemberTypeVisitor for SizeOf {
            fn visit<const I: usize, T: MemberAt<I>>(&mut self) {
                self.0 += std::mem::size_of::<<T as MemberAt<I>>::Type>();
            }
        }

        let mut total = SizeOf(0);
        reflection::visit_member_types::<Triple, _>(&mut total);
        assert_eq!(total.0, 12);
    }

    #[test]
    fn call_on_members_supplies_names() {
        let mut pairs = Vec::new();
        call_on_members(&Point(1, 2), |name, value| pairs.push(format!("{name}:{value}")));
        assert_eq!(pairs, ["0:1", "1:2"]);
    }

    #[test]
    fn folding_indices_over_five_members() {
        let sum = fold_member_types::<Five, usize, _>(0, |acc, member| acc + member.index);
        assert_eq!(sum, 10);
    }

    #[test]
    fn folding_values_over_a_record() {
        let triple = Triple { x: 1, y: 2, z: 3 };
        let sum = fold_members(&triple, 0, |acc, _, value| acc + value.downcast_ref::<i32>().copied().unwrap_or(0));
        assert_eq!(sum, 6);

        let names = fold_members(&triple, String::new(), |acc, name, _| acc + name);
        assert_eq!(names, "xyz");
    }
}

// =============================================================================
// Differences
// =============================================================================

/// Not comparable as a whole, so diffs recurse into it.
#[derive(Reflect)]
struct Contact {
    email: String,
    phone: Option<String>,
}

#[derive(Reflect)]
struct Employee {
    id: u32,
    contact: Contact,
    color: Color,
}

fn employee(id: u32, email: &str, color: Color) -> Employee {
    Employee {
        id,
        contact: Contact {
            email: email.into(),
            phone: None,
        },
        color,
    }
}

mod diff {
    use super::*;

    #[test]
    fn a_value_has_no_differences_with_itself() {
        let person = john();
        let mut calls = 0;
        collect_differences(&person, &person, |_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn differing_members_are_reported_in_order() {
        let lhs = john();
        let rhs = Person {
            name: "Jane Doe",
            age: 41,
            ..john()
        };
        let mut reported = Vec::new();
        collect_differences(&lhs, &rhs, |name, l, r| reported.push(format!("{name}: {l} -> {r}")));
        assert_eq!(reported, ["name: \"John Doe\" -> \"Jane Doe\"", "age: 42 -> 41"]);

        let mut indices = Vec::new();
        collect_differences_by_index(&lhs, &rhs, |index, _, _| indices.push(index));
        assert_eq!(indices, [0, 2]);
    }

    #[test]
    fn non_comparable_members_are_walked() {
        let lhs = employee(1, "a@example.com", Color::Red);
        let rhs = employee(1, "b@example.com", Color::Blue);
        let found = differences(&lhs, &rhs);
        let summary: Vec<_> = found
            .iter()
            .map(|difference| (difference.index, difference.name, difference.rhs.to_string()))
            .collect();
        assert_eq!(
            summary,
            [(0, "email", "\"b@example.com\"".to_string()), (2, "color", "Blue".to_string())]
        );
    }
}

// =============================================================================
// Generic aggregates
// =============================================================================

#[derive(Reflect)]
struct Tagged<T> {
    tag: &'static str,
    value: T,
}

#[test]
fn generic_aggregates_reflect_their_parameters() {
    let lhs = Tagged { tag: "n", value: 1_u8 };
    let rhs = Tagged { tag: "n", value: 2_u8 };
    assert_eq!(reflection::count_members::<Tagged<u8>>(), 2);
    assert_eq!(differences(&lhs, &rhs).len(), 1);
    assert_eq!(type_name_of::<MemberTypeOf<Tagged<Color>, 1>>(), "Color");
    assert_eq!(reflection::inspect(&lhs), r#"tag="n" value=1"#);
}

// =============================================================================
// Member types without runtime capabilities
// =============================================================================

mod member_capabilities {
    use std::collections::BTreeMap;
    use std::time::Duration;

    use super::*;
    use reflection::{count_members, inspect, member_names};

    #[derive(Reflect)]
    struct Span {
        range: (u32, u32),
        tags: BTreeMap<String, u8>,
        timeout: Duration,
    }

    /// Reflected, but deliberately not `PartialEq`.
    #[derive(Debug, Reflect, Clone, Copy)]
    enum Mode {
        Fast,
        Slow,
    }

    #[derive(Reflect)]
    struct Settings {
        name: String,
        mode: Mode,
    }

    /// Implements neither `Reflect` nor `PartialEq`.
    struct Handle {
        raw: i32,
    }

    #[derive(Reflect)]
    struct Connection {
        host: &'static str,
        handle: Handle,
        retries: u8,
    }

    #[derive(Reflect)]
    struct Guard {
        id: u8,
        armed: bool,
    }

    impl Drop for Guard {
        fn drop(&mut self) {}
    }

    #[test]
    fn std_containers_count_and_render() {
        let span = Span {
            range: (3, 7),
            tags: BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 2)]),
            timeout: Duration::from_millis(1500),
        };
        assert_eq!(count_members::<Span>(), 3);
        assert_eq!(member_names::<Span>(), ["range", "tags", "timeout"]);
        assert_eq!(type_name_of::<MemberTypeOf<Span, 1>>(), "BTreeMap<String, u8>");
        assert_eq!(inspect(&span), r#"range=(3, 7) tags={"a": 1, "b": 2} timeout=1.5s"#);

        let (range, _, _) = to_tuple(&span);
        assert_eq!(*range, (3, 7));
    }

    #[test]
    fn members_without_partial_eq_do_not_block_reflection() {
        let settings = Settings {
            name: "turbo".into(),
            mode: Mode::Fast,
        };
        assert_eq!(count_members::<Settings>(), 2);
        assert_eq!(get_member_at::<1, _>(&settings).variant_name(), "Fast");
        assert_eq!(inspect(&settings), r#"name="turbo" mode=Fast"#);
        assert_eq!(enum_variant_names::<Mode>(), ["Fast", "Slow"]);
    }

    #[test]
    fn generic_parameters_need_no_partial_eq_for_structure() {
        let tagged = Tagged {
            tag: "m",
            value: Mode::Slow,
        };
        assert_eq!(count_members::<Tagged<Mode>>(), 2);
        assert_eq!(inspect(&tagged), r#"tag="m" value=Slow"#);
    }

    #[test]
    fn unreflectable_members_are_opaque_values() {
        let connection = Connection {
            host: "db",
            handle: Handle { raw: 7 },
            retries: 3,
        };
        assert_eq!(count_members::<Connection>(), 3);
        assert_eq!(get_member_at::<1, _>(&connection).raw, 7);
        assert_eq!(inspect(&connection), r#"host="db" handle=<opaque> retries=3"#);

        let mut visited = Vec::new();
        enumerate_members(&connection, |index, _| visited.push(index));
        assert_eq!(visited, [0, 1, 2]);
        assert!(connection.member(1).is_some_and(|handle| handle.downcast_ref::<i32>().is_none()));
    }

    #[test]
    fn drop_types_with_copy_members_decompose() {
        let guard = Guard { id: 9, armed: true };
        assert_eq!(count_members::<Guard>(), 2);
        assert_eq!(into_tuple(guard), (9, true));
    }
}
