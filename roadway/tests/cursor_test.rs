use roadway::{Cursor, CursorConfig, List, Subject, Text};

const RIDERS: &str = "riders on the storm";

#[test]
fn test_cursor_new() {
    let cursor = Cursor::over(Text::new("hello")).unwrap();
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.frame_start(), None);
    assert!(!cursor.is_framed());
    assert!(!cursor.eof(0));
}

#[test]
fn test_cursor_peek() {
    let cursor = Cursor::over(Text::new(RIDERS)).unwrap();
    for (i, ch) in RIDERS.chars().enumerate() {
        assert_eq!(cursor.peek(i), Some(ch));
    }
    assert_eq!(cursor.position(), 0); // Should not advance
}

#[test]
fn test_cursor_peek_past_end() {
    let cursor = Cursor::over(Text::new("hi")).unwrap();
    assert_eq!(cursor.peek(2), None);
    assert_eq!(cursor.peek(usize::MAX), None);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_cursor_next() {
    let mut cursor = Cursor::over(Text::new(RIDERS)).unwrap();
    for ch in RIDERS.chars() {
        assert_eq!(cursor.next(0), Some(ch));
    }
    assert_eq!(cursor.position(), RIDERS.len());
}

#[test]
fn test_cursor_next_with_offset_returns_origin() {
    let mut cursor = Cursor::over(Text::new(RIDERS)).unwrap();
    assert_eq!(cursor.next(5), Some('r'));
    assert_eq!(cursor.position(), 6);
    assert_eq!(cursor.peek(0), Some(' '));
}

#[test]
fn test_cursor_next_offset_may_jump_past_end() {
    let mut cursor = Cursor::over(Text::new("abc")).unwrap();
    assert_eq!(cursor.next(10), Some('a'));
    assert_eq!(cursor.position(), 11);
    assert!(cursor.eof(0));
    assert_eq!(cursor.next(0), None);
    assert_eq!(cursor.position(), 11);
}

#[test]
fn test_cursor_eof() {
    let mut cursor = Cursor::over(Text::new(RIDERS)).unwrap();
    while !cursor.eof(0) {
        cursor.next(0);
    }
    assert_eq!(cursor.position(), RIDERS.len());
    assert_eq!(cursor.next(0), None);
}

#[test]
fn test_cursor_eof_matches_position() {
    let mut cursor = Cursor::over(Text::new("abcd")).unwrap();
    for _ in 0..4 {
        assert!(!cursor.eof(0));
        cursor.next(0);
    }
    assert!(cursor.eof(0));
    assert_eq!(cursor.position(), 4);
}

#[test]
fn test_cursor_eof_with_offset() {
    let cursor = Cursor::over(Text::new("abcd")).unwrap();
    assert!(!cursor.eof(3));
    assert!(cursor.eof(4));
    assert!(cursor.eof(usize::MAX));
}

#[test]
fn test_cursor_next_at_eof_is_idempotent() {
    let mut cursor = Cursor::over(Text::new("h")).unwrap();
    assert_eq!(cursor.next(0), Some('h'));
    assert_eq!(cursor.next(0), None);
    assert_eq!(cursor.next(3), None); // Should be safe to call multiple times
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_cursor_peek_never_moves() {
    let mut cursor = Cursor::over(Text::new("hello")).unwrap();
    cursor.next(0);
    for offset in 0..10 {
        cursor.peek(offset);
        cursor.peek(offset);
        assert_eq!(cursor.position(), 1);
    }
}

#[test]
fn test_cursor_unicode() {
    let mut cursor = Cursor::over(Text::new("你好世界")).unwrap();
    assert_eq!(cursor.peek(0), Some('你'));
    cursor.next(0);
    assert_eq!(cursor.peek(0), Some('好'));
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.next(2), Some('好'));
    assert!(cursor.eof(0));
}

#[test]
fn test_cursor_reset_keeps_subject() {
    let first = &RIDERS[RIDERS.len() / 2..];
    let second = &RIDERS[RIDERS.len() / 4..];
    let mut cursor = Cursor::over(Text::new(first)).unwrap();

    while !cursor.eof(0) {
        cursor.next(0);
    }
    assert_eq!(cursor.position(), first.len());

    cursor.reset(None).unwrap();
    assert_eq!(cursor.subject().unwrap(), &first);
    assert_eq!(cursor.position(), 0);

    cursor.reset(Some(Text::new(second))).unwrap();
    assert_eq!(cursor.subject().unwrap(), &second);
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_cursor_rewind() {
    let mut cursor = Cursor::framed(Text::new("hello")).unwrap();
    cursor.next(1);
    cursor.record().unwrap();
    cursor.rewind();
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.frame_start(), None);
    assert_eq!(cursor.peek(0), Some('h'));
}

#[test]
fn test_rewind_matches_reset_without_subject() {
    let mut rewound = Cursor::framed(Text::new("hello")).unwrap();
    let mut reset = rewound.clone();
    for cursor in [&mut rewound, &mut reset] {
        cursor.next(2);
        cursor.record().unwrap();
    }

    rewound.rewind();
    reset.reset(None).unwrap();
    assert_eq!(rewound.position(), reset.position());
    assert_eq!(rewound.frame_start(), reset.frame_start());
    assert_eq!(rewound.subject(), reset.subject());
    assert_eq!(rewound.config(), reset.config());
    assert!(rewound.is_framed());
}

#[test]
fn test_cursor_list() {
    let mut cursor = Cursor::over(List::from(vec!["let", "x", "=", "1"])).unwrap();
    assert_eq!(cursor.next(0), Some("let"));
    assert_eq!(cursor.peek(1), Some("="));
    assert_eq!(cursor.next(2), Some("x"));
    assert_eq!(cursor.next(0), None);
    assert_eq!(cursor.position(), 4);
}

#[test]
fn test_unbound_cursor_reads_nothing() {
    let mut cursor: Cursor<Text> = Cursor::unbound(CursorConfig::default());
    assert!(cursor.subject().is_none());
    assert_eq!(cursor.peek(0), None);
    assert_eq!(cursor.next(0), None);
    assert_eq!(cursor.position(), 0);
    // An unbound cursor never reports end of input.
    assert!(!cursor.eof(0));
}

#[test]
fn test_unbound_cursor_can_be_bound_by_reset() {
    let mut cursor = Cursor::new(None, CursorConfig::default()).unwrap();
    cursor.reset(Some(Text::new("ok"))).unwrap();
    assert_eq!(cursor.subject().and_then(Subject::length), Some(2));
    assert_eq!(cursor.next(0), Some('o'));
}
