use cardscan_core::domain::{is_valid_phone_number, normalize_phone, to_dial_form, CountryCode};
use cardscan_core::extract::{extract_fields, ExtractOptions, KnownValues};
use cardscan_core::{scan_text, PhoneSlot, ScanReportDto};

const SAMPLE_CARD: &str = "\
Rachel Tan
Manager
PSG Sdn Bhd
Lot 210 / EM4088,
Jalan Kampung Jawa,
41200 Klang, Selangor.
Mobile No : 017-334 7211
Telephone No : 03-3342 0758
Fax No : 03-3359 1780
Email Add. : rachel@psg.com.my
";

#[test]
fn sample_card_fields_are_extracted() {
    let fields = extract_fields(SAMPLE_CARD, &ExtractOptions::default());

    assert_eq!(fields.phones.mobile1.as_deref(), Some("017-334-7211"));
    assert_eq!(fields.phones.mobile2, None);
    assert_eq!(fields.phones.office.as_deref(), Some("03-3342-0758"));
    assert_eq!(fields.phones.fax.as_deref(), Some("03-3359-1780"));
    assert_eq!(fields.email.as_deref(), Some("rachel@psg.com.my"));
    assert_eq!(fields.name.as_deref(), Some("Rachel Tan"));
    assert_eq!(fields.job_title.as_deref(), Some("Manager"));
    assert_eq!(fields.company.as_deref(), Some("PSG Sdn Bhd"));

    let address = fields.address.expect("address");
    assert_eq!(
        address,
        "Lot 210 / EM4088, Jalan Kampung Jawa, 41200 Klang, Selangor."
    );
    for marker in ["Mobile", "Telephone", "Fax", "@"] {
        assert!(!address.contains(marker), "address contains {marker}");
    }
}

#[test]
fn identity_lines_after_address_are_not_continuations() {
    let text = "\
Lot 210 / EM4088,
Jalan Kampung Jawa,
Rachel Tan
Manager
PSG Sdn Bhd
Mobile No : 017-334 7211
";
    let options = ExtractOptions {
        known: KnownValues {
            name: Some("Rachel Tan".to_string()),
            ..KnownValues::default()
        },
        ..ExtractOptions::default()
    };
    let fields = extract_fields(text, &options);
    assert_eq!(fields.job_title.as_deref(), Some("Manager"));
    assert_eq!(fields.company.as_deref(), Some("PSG Sdn Bhd"));
    assert_eq!(
        fields.address.as_deref(),
        Some("Lot 210 / EM4088, Jalan Kampung Jawa")
    );
}

#[test]
fn card_without_person_name_keeps_full_address() {
    let text = "\
PSG Sdn Bhd
Lot 210 / EM4088,
Taman Sri Andalas,
Bukit Raja
41200 Klang
Mobile No : 017-334 7211
";
    let guessed = extract_fields(text, &ExtractOptions::default());
    let plain = extract_fields(
        text,
        &ExtractOptions {
            guess_identity: false,
            ..ExtractOptions::default()
        },
    );

    assert_eq!(guessed.name, None);
    assert_eq!(guessed.company.as_deref(), Some("PSG Sdn Bhd"));
    assert_eq!(
        guessed.address.as_deref(),
        Some("Lot 210 / EM4088, Taman Sri Andalas, Bukit Raja, 41200 Klang")
    );
    assert_eq!(guessed.address, plain.address);
}

#[test]
fn caller_supplied_values_win_and_extend_denylist() {
    let text = "\
No. 8, Jalan Bukit
Taman Melawati
Tan Ah Kow
Chief Whatever
";
    let options = ExtractOptions {
        known: KnownValues {
            name: Some("Tan Ah Kow".to_string()),
            job_title: Some("  ".to_string()),
            company: None,
            deny: Vec::new(),
        },
        guess_identity: false,
        ..ExtractOptions::default()
    };
    let fields = extract_fields(text, &options);
    assert_eq!(fields.name.as_deref(), Some("Tan Ah Kow"));
    assert_eq!(fields.job_title, None);
    assert_eq!(
        fields.address.as_deref(),
        Some("No. 8, Jalan Bukit, Taman Melawati")
    );
}

#[test]
fn empty_and_noise_inputs_yield_empty_fields() {
    for text in ["", "\n\n  \n", "???", "Mobile\nTel\nFax", "@@@ ###"] {
        let fields = extract_fields(text, &ExtractOptions::default());
        assert!(fields.phones.is_empty(), "{text:?}");
        assert_eq!(fields.email, None, "{text:?}");
        assert_eq!(fields.address, None, "{text:?}");
    }
}

#[test]
fn extracted_phones_normalize_for_storage_and_dialing() {
    let my = CountryCode::malaysia();
    let fields = extract_fields(SAMPLE_CARD, &ExtractOptions::default());
    let mobile = fields.phones.mobile1.expect("mobile");
    assert!(is_valid_phone_number(&mobile, &my));
    assert_eq!(normalize_phone(&mobile, &my), "+60173347211");
    assert_eq!(to_dial_form(&mobile, &my), "60173347211");
}

#[test]
fn scan_report_lists_phones_in_every_form() {
    let my = CountryCode::malaysia();
    let card = scan_text(SAMPLE_CARD, &ExtractOptions::default(), 1_700_000_000);
    let report = ScanReportDto::from_card(&card, &my);

    assert_eq!(report.display_name, "Rachel Tan");
    assert_eq!(report.scanned_at, 1_700_000_000);
    assert_eq!(report.phones.len(), 3);
    let office = &report.phones[1];
    assert_eq!(office.slot, PhoneSlot::Office);
    assert_eq!(office.raw, "03-3342-0758");
    assert_eq!(office.storage, "+60333420758");
    assert_eq!(office.dial, "60333420758");
    assert_eq!(office.display, "+60 3-3342 0758");
}
