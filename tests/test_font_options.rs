// SPDX-License-Identifier: GPL-3.0-or-later
use vellum::{Antialias, FontOptions, HintMetrics, HintStyle, SubpixelOrder};

#[test]
fn test_defaults() {
    let options = FontOptions::create().unwrap();
    assert_eq!(options.antialias(), Antialias::Default);
    assert_eq!(options.subpixel_order(), SubpixelOrder::Default);
    assert_eq!(options.hint_style(), HintStyle::Default);
    assert_eq!(options.hint_metrics(), HintMetrics::Default);
}

#[test]
fn test_setters_roundtrip() {
    let mut options = FontOptions::create().unwrap();
    options.set_antialias(Antialias::Gray).unwrap();
    options.set_subpixel_order(SubpixelOrder::Bgr).unwrap();
    options.set_hint_style(HintStyle::Slight).unwrap();
    options.set_hint_metrics(HintMetrics::On).unwrap();
    assert_eq!(options.antialias(), Antialias::Gray);
    assert_eq!(options.subpixel_order(), SubpixelOrder::Bgr);
    assert_eq!(options.hint_style(), HintStyle::Slight);
    assert_eq!(options.hint_metrics(), HintMetrics::On);
}

#[test]
fn test_equality_and_clone() {
    let mut first = FontOptions::create().unwrap();
    let second = FontOptions::create().unwrap();
    assert!(first == second);

    first.set_antialias(Antialias::None).unwrap();
    assert!(first != second);

    let copy = first.clone();
    assert!(copy == first);
    assert_eq!(copy.antialias(), Antialias::None);
}

#[test]
fn test_merge_takes_explicit_settings() {
    let mut base = FontOptions::create().unwrap();
    let mut other = FontOptions::create().unwrap();
    other.set_hint_style(HintStyle::Full).unwrap();
    base.merge(&other).unwrap();
    assert_eq!(base.hint_style(), HintStyle::Full);
}
