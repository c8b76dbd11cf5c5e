//! The standard test dataset: five newspapers, five editors, seven
//! subscribers, and eight issues on paper 100.

use chrono::NaiveDate;
use gazette_core::agency::Agency;
use gazette_core::editor::Editor;
use gazette_core::issue::Issue;
use gazette_core::newspaper::Newspaper;
use gazette_core::subscriber::Subscriber;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture dates are valid")
}

/// Builds a freshly populated registry. Tests get their own instance, so
/// mutations never leak between them.
///
/// # Panics
///
/// Panics if the fixture data violates a registry invariant, which would
/// be a bug in the fixture itself.
#[must_use]
pub fn sample_agency() -> Agency {
    let mut agency = Agency::new();

    for (id, name, frequency, price) in [
        (100, "The New York Times", 7, 13.14),
        (101, "Heute", 1, 1.12),
        (115, "Wall Street Journal", 1, 3.00),
        (125, "National Geographic", 30, 34.00),
        (135, "Kronen Zeitung", 15, 30.00),
    ] {
        agency
            .add_newspaper(Newspaper::new(id, name, frequency, price))
            .expect("fixture newspapers are unique");
    }

    for (id, name, address) in [
        (1, "Gustav", "Vikingstreet 3"),
        (102, "Katherina", "Osterhasen 27"),
        (108, "Osiris", "Pyramidsstreet 42"),
        (130, "Josef", "Josefstreet 9"),
        (131, "Joey", "Joeystreet 9"),
    ] {
        agency
            .add_editor(Editor::new(id, name, address))
            .expect("fixture editors are unique");
    }

    for (id, name, address) in [
        (10, "Anton", "Kufsteinstrasse 99"),
        (103, "Medusa", "Gorgonstreet 150"),
        (120, "Emil", "Elephantstreet 8"),
        (150, "Emilia", "Mamuthallee 35"),
        (160, "Emanuel", "Treestreet 36"),
        (170, "Alisa", "Flowerstreet 37"),
        (180, "Alfred", "Flowerstreet 37"),
    ] {
        agency
            .add_subscriber(Subscriber::new(id, name, address))
            .expect("fixture subscribers are unique");
    }

    for (issue_id, release_date, editor_id, pages) in [
        (90, date(2024, 10, 15), Some(1), 33),
        (91, date(2024, 10, 17), None, 23),
        (92, date(2024, 11, 19), Some(102), 23),
        (93, date(2024, 11, 25), Some(1), 10),
        (94, date(2023, 12, 16), Some(1), 5),
        (95, date(2024, 12, 18), None, 5),
        (96, date(2024, 12, 28), Some(1), 30),
        (97, date(2024, 10, 28), None, 30),
    ] {
        agency
            .add_issue(100, Issue::new(issue_id, release_date, editor_id, pages, 100))
            .expect("fixture issues are unique");
    }

    agency
}
