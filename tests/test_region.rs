// SPDX-License-Identifier: GPL-3.0-or-later
use vellum::{Region, RegionOverlap, RectangleInt};

fn rect(x: i32, y: i32, width: i32, height: i32) -> RectangleInt {
    RectangleInt {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn test_empty_region() {
    let region = Region::create().unwrap();
    assert!(region.is_empty());
    assert_eq!(region.num_rectangles(), 0);
}

#[test]
fn test_rectangle_region() {
    let region = Region::create_rectangle(&rect(0, 0, 10, 10)).unwrap();
    assert!(!region.is_empty());
    assert!(region.contains_point(5, 5));
    assert!(!region.contains_point(15, 5));
    assert_eq!(region.extents(), rect(0, 0, 10, 10));
}

#[test]
fn test_union_and_subtract() {
    let region = Region::create_rectangle(&rect(0, 0, 10, 10)).unwrap();
    region.union_rectangle(&rect(20, 0, 10, 10)).unwrap();
    assert_eq!(region.num_rectangles(), 2);
    assert!(region.contains_point(25, 5));
    assert_eq!(region.extents(), rect(0, 0, 30, 10));

    region.subtract_rectangle(&rect(20, 0, 10, 10)).unwrap();
    let original = Region::create_rectangle(&rect(0, 0, 10, 10)).unwrap();
    assert!(*region == *original);
}

#[test]
fn test_intersection() {
    let region = Region::create_rectangle(&rect(0, 0, 10, 10)).unwrap();
    region.intersect_rectangle(&rect(5, 5, 10, 10)).unwrap();
    assert_eq!(region.extents(), rect(5, 5, 5, 5));
}

#[test]
fn test_xor_with_itself_empties() {
    let region = Region::create_rectangle(&rect(0, 0, 10, 10)).unwrap();
    let copy = region.copy().unwrap();
    region.xor(&copy).unwrap();
    assert!(region.is_empty());
}

#[test]
fn test_overlap_classification() {
    let region = Region::create_rectangle(&rect(0, 0, 10, 10)).unwrap();
    assert_eq!(
        region.contains_rectangle(&rect(2, 2, 4, 4)),
        RegionOverlap::In
    );
    assert_eq!(
        region.contains_rectangle(&rect(20, 20, 4, 4)),
        RegionOverlap::Out
    );
    assert_eq!(
        region.contains_rectangle(&rect(8, 8, 6, 6)),
        RegionOverlap::Part
    );
}

#[test]
fn test_translate() {
    let region = Region::create_rectangle(&rect(0, 0, 10, 10)).unwrap();
    region.translate(5, 7);
    assert_eq!(region.extents(), rect(5, 7, 10, 10));
    assert!(region.contains_point(6, 8));
}

#[test]
fn test_rectangles_constructor() {
    let region = Region::create_rectangles(&[rect(0, 0, 4, 4), rect(8, 0, 4, 4)]).unwrap();
    assert_eq!(region.num_rectangles(), 2);
    assert_eq!(region.rectangle(0), rect(0, 0, 4, 4));
    assert_eq!(region.rectangle(1), rect(8, 0, 4, 4));
}
