use super::*;

fn demo() -> Timeline<()> {
    let durations = [90u64, 120, 120, 120, 120, 120];
    Timeline::compose(
        durations
            .iter()
            .enumerate()
            .map(|(i, &d)| (format!("s{i}"), d, ())),
    )
    .unwrap()
}

#[test]
fn demo_reel_durations_total_690() {
    assert_eq!(demo().total(), 690);
    assert_eq!(demo().len(), 6);
}

#[test]
fn boundaries_resolve_to_the_right_entry() {
    let t = demo();
    assert_eq!(t.locate(FrameIndex(0)), Some((0, FrameIndex(0))));
    assert_eq!(t.locate(FrameIndex(89)), Some((0, FrameIndex(89))));
    assert_eq!(t.locate(FrameIndex(90)), Some((1, FrameIndex(0))));
    assert_eq!(t.locate(FrameIndex(689)), Some((5, FrameIndex(119))));
    assert_eq!(t.locate(FrameIndex(690)), None);
}

#[test]
fn entries_are_contiguous() {
    let t = demo();
    let mut start = 0;
    for e in t.entries() {
        assert_eq!(e.range.start.0, start);
        start = e.range.end.0;
    }
    assert_eq!(start, t.total());
}

#[test]
fn every_frame_belongs_to_exactly_one_entry() {
    let t = demo();
    for f in 0..t.total() {
        let hits = t
            .entries()
            .iter()
            .filter(|e| e.range.contains(FrameIndex(f)))
            .count();
        assert_eq!(hits, 1, "frame {f}");
        assert!(t.locate(FrameIndex(f)).is_some());
    }
}

#[test]
fn zero_duration_entries_never_match() {
    let t = Timeline::compose(vec![
        ("a".to_string(), 10u64, 'a'),
        ("gap".to_string(), 0, 'g'),
        ("b".to_string(), 5, 'b'),
    ])
    .unwrap();
    assert_eq!(t.total(), 15);
    assert_eq!(t.entry_at(FrameIndex(9)).map(|e| e.item), Some('a'));
    assert_eq!(t.entry_at(FrameIndex(10)).map(|e| e.item), Some('b'));
    assert!(t.entries()[1].range.is_empty());
}

#[test]
fn empty_timeline_has_no_frames() {
    let t: Timeline<()> = Timeline::compose(Vec::new()).unwrap();
    assert!(t.is_empty());
    assert_eq!(t.total(), 0);
    assert_eq!(t.locate(FrameIndex(0)), None);
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = Timeline::compose(vec![("x".to_string(), 1u64, ()), ("x".to_string(), 2, ())])
        .unwrap_err();
    assert!(err.to_string().contains("duplicate"));
}
