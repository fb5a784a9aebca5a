//! Checks that hold for any selection, run against many selections from the sample catalog.

use std::collections::HashSet;

use course_order::relationship_resolver::*;
use course_order::CourseRecord;
use course_order_test_utils::{get_catalog, identifiers, select};

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Every course is placed once and after each selected prerequisite the matcher finds for it.
fn assert_valid_order(selection: &[CourseRecord]) {
	let resolved = resolve(selection).unwrap_or_else(|e| panic!("resolve failed for {:?}: {}", identifiers(selection), e));
	let order = identifiers(resolved.iter().copied());

	assert_eq!(order.len(), selection.len(), "course count changed for {:?}", identifiers(selection));
	let placed: HashSet<&str> = order.iter().copied().collect();
	let selected: HashSet<&str> = identifiers(selection).into_iter().collect();
	assert_eq!(placed, selected);

	let position = |id: &str| order.iter().position(|o| *o == id).expect("course missing from order");
	for dependent in selection {
		for reference in &dependent.prerequisites {
			if let Some(prerequisite) = find_matching_course(reference, selection) {
				if prerequisite.identifier == dependent.identifier {
					continue;
				}
				assert!(
					position(&prerequisite.identifier) < position(&dependent.identifier),
					"{} should come before {} in {:?}", prerequisite.identifier, dependent.identifier, order
				);
			}
		}
	}
}

#[test]
fn sample_selections() {
	init_logger();

	let selections: &[&[&str]] = &[
		&["CS 428", "CS 403", "CS 401", "CS 427"],
		&["CS 428", "CS 403", "CS 400", "CS 401", "CS 410", "CS 427", "CS 402", "CS 429"],
		&["CS 428", "CS 524", "CS 403", "CS 422", "CS 401", "CS 421", "CS 427", "CS 429"],
		&["CS 403", "CS 401", "CS 428", "CS 427", "CS 400"],
		&["CS 565", "CS 582", "CS 465", "CS 466", "CS 446", "CS 225"],
		&["CS 524", "CS 475", "CS 374", "CS 426", "CS 421", "CS 422", "CS 225"],
	];

	for codes in selections {
		assert_valid_order(&select(codes));
	}
}

#[test]
fn whole_catalog() {
	init_logger();

	let catalog = get_catalog();
	assert_valid_order(catalog.courses());

	let reversed: Vec<CourseRecord> = catalog.courses().iter().rev().cloned().collect();
	assert_valid_order(&reversed);

	let graduate: Vec<CourseRecord> = catalog.graduate_courses().into_iter().cloned().collect();
	assert_valid_order(&graduate);
}

#[test]
fn every_pair_and_rotation() {
	let catalog = get_catalog();
	let courses = catalog.courses();

	for a in courses {
		for b in courses {
			if a.identifier != b.identifier {
				assert_valid_order(&[a.clone(), b.clone()]);
			}
		}
	}

	for shift in 0..courses.len() {
		let mut rotated = courses.to_vec();
		rotated.rotate_left(shift);
		assert_valid_order(&rotated);
	}
}

#[test]
fn sorted_output_is_a_fixed_point() {
	let catalog = get_catalog();
	let reversed: Vec<CourseRecord> = catalog.courses().iter().rev().cloned().collect();

	let once: Vec<CourseRecord> = resolve(&reversed).unwrap().into_iter().cloned().collect();
	let twice: Vec<CourseRecord> = resolve(&once).unwrap().into_iter().cloned().collect();
	assert_eq!(identifiers(&once), identifiers(&twice));
}

#[test]
fn unrelated_courses_keep_selection_order() {
	/* None of these require another */
	let codes = ["CS 411", "CS 400", "CS 465", "CS 402", "CS 401", "CS 427"];
	let selection = select(&codes);
	assert_eq!(identifiers(resolve(&selection).unwrap()), codes);
}
