//! End-to-end reassembly through the public API.

use rstest::rstest;
use sms_udh::{Encoding, FragmentStatus, FragmentStore, MessagePart, Reference, UdhError};

mod common;
use common::{HEBREW_LAST_PART, HEBREW_LAST_TEXT, TestResult, gsm_hex};

#[test]
fn sixteen_bit_reference_ucs2_part_decodes() -> TestResult {
    let part = MessagePart::parse(HEBREW_LAST_PART, Encoding::Ucs2)?;
    assert_eq!(part.element(), 0x08);
    assert_eq!(part.reference(), &Reference::from(vec![0x75, 0x39]));
    assert_eq!((part.total_parts(), part.current_part()), (4, 4));
    assert_eq!(part.message(), HEBREW_LAST_TEXT);
    Ok(())
}

#[rstest]
#[case::ascending([1, 2, 3])]
#[case::descending([3, 2, 1])]
#[case::middle_last([1, 3, 2])]
fn three_part_message_reassembles(#[case] order: [u8; 3]) -> TestResult {
    let texts = ["Meet ", "me at ", "noon"];
    let store = FragmentStore::new();

    let mut statuses = Vec::new();
    for current in order {
        let text = texts[usize::from(current - 1)];
        statuses.push(store.add_raw(&gsm_hex(0x42, 3, current, text), Encoding::Gsm7)?);
    }

    assert_eq!(
        statuses,
        [
            FragmentStatus::Incomplete,
            FragmentStatus::Incomplete,
            FragmentStatus::Complete
        ]
    );
    let mut set = store.get(&[0x42]).ok_or("reference 0x42 should be tracked")?;
    assert_eq!(set.concatenate_by_part(), "Meet me at noon");
    Ok(())
}

#[test]
fn interleaved_messages_stay_isolated() -> TestResult {
    let store = FragmentStore::new();
    store.add_raw(&gsm_hex(1, 2, 1, "ab"), Encoding::Gsm7)?;
    store.add_raw(&gsm_hex(2, 2, 2, "yz"), Encoding::Gsm7)?;
    store.add_raw(&gsm_hex(1, 2, 2, "cd"), Encoding::Gsm7)?;
    store.add_raw(&gsm_hex(2, 2, 1, "wx"), Encoding::Gsm7)?;

    let mut first = store.get(&[1]).ok_or("reference 1 should be tracked")?;
    let mut second = store.get(&[2]).ok_or("reference 2 should be tracked")?;
    assert_eq!(first.concatenate_by_part(), "abcd");
    assert_eq!(second.concatenate_by_part(), "wxyz");
    Ok(())
}

#[test]
fn rejected_parts_do_not_disturb_progress() -> TestResult {
    let store = FragmentStore::new();
    store.add_raw(&gsm_hex(9, 2, 1, "ok"), Encoding::Gsm7)?;

    let err = store
        .add_raw("05010309020241", Encoding::Gsm7)
        .expect_err("element 0x01 is not a concatenation header");
    assert_eq!(err, UdhError::UnsupportedElementIdentifier(0x01));

    let set = store.get(&[9]).ok_or("reference 9 should be tracked")?;
    assert_eq!(set.len(), 1);
    assert!(!set.is_complete());
    Ok(())
}
