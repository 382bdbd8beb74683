use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_local_maps_relative_to_start() {
    let r = FrameRange::from_len(FrameIndex(90), 120);
    assert_eq!(r.local(FrameIndex(90)), Some(FrameIndex(0)));
    assert_eq!(r.local(FrameIndex(209)), Some(FrameIndex(119)));
    assert_eq!(r.local(FrameIndex(210)), None);
    assert_eq!(r.local(FrameIndex(89)), None);
}

#[test]
fn empty_range_contains_nothing() {
    let r = FrameRange::from_len(FrameIndex(10), 0);
    assert!(r.is_empty());
    assert!(!r.contains(FrameIndex(10)));
    assert_eq!(r.clamp(FrameIndex(50)), FrameIndex(10));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123.0);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_and_canvas_reject_zero() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert!(Canvas::new(0, 1080).is_err());
    assert!(Canvas::new(1920, 0).is_err());
    assert_eq!(
        Canvas::new(1920, 1080).unwrap().center(),
        Point::new(960.0, 540.0)
    );
}
