//! Tests for `PayloadBuilder` in both dialects.

use serde_json::{Value, json};

use crate::{Attachment, BuildError, Color, Dialect, Embed, Field, Payload, PayloadBuilder};

fn to_value<D: Dialect>(builder: &PayloadBuilder<D>) -> Value {
    serde_json::to_value(builder.payload()).unwrap()
}

fn field(label: &str, value: &str, inline: bool) -> Field {
    Field {
        label: label.to_owned(),
        value: value.to_owned(),
        inline,
    }
}

#[test]
fn fresh_builders_hold_one_empty_section() {
    let attachment = PayloadBuilder::for_attachment_style();
    assert_eq!(to_value(&attachment), json!({"attachments": [{"fields": []}]}));

    let embed = PayloadBuilder::for_embed_style();
    assert_eq!(to_value(&embed), json!({"embeds": [{"fields": []}]}));

    assert_eq!(PayloadBuilder::<Embed>::default(), embed);
}

#[test]
fn default_payload_is_empty_in_both_dialects() {
    let attachment = Payload::<Attachment>::default();
    assert_eq!(attachment.section.timestamp, None);
    assert!(attachment.section.fields.is_empty());
    assert_eq!(PayloadBuilder::<Attachment>::new().build(), attachment);

    let embed = Payload::<Embed>::default();
    assert_eq!(embed.text, None);
    assert_eq!(embed.section.timestamp, None);
    assert_eq!(PayloadBuilder::<Embed>::new().build(), embed);
}

#[test]
fn alert_scenario_attachment_style() {
    let mut builder = PayloadBuilder::for_attachment_style();
    builder
        .set_title("Alert")
        .set_color("#ff0000")
        .add_field("Host", "db-1", Some(true))
        .set_text("System down");

    assert_eq!(
        to_value(&builder),
        json!({
            "text": "System down",
            "attachments": [{
                "title": "Alert",
                "color": "#ff0000",
                "fields": [{"title": "Host", "value": "db-1", "inline": true}]
            }]
        })
    );
}

#[test]
fn alert_scenario_embed_style() {
    let mut builder = PayloadBuilder::for_embed_style();
    builder
        .set_title("Alert")
        .set_color("#ff0000")
        .add_field("Host", "db-1", Some(true))
        .set_text("System down");

    assert_eq!(
        to_value(&builder),
        json!({
            "text": "System down",
            "embeds": [{
                "title": "Alert",
                "color": "#ff0000",
                "fields": [{"name": "Host", "value": "db-1", "inline": true}]
            }]
        })
    );
}

#[test]
fn description_key_depends_on_dialect() {
    let mut attachment = PayloadBuilder::for_attachment_style();
    attachment.set_description("body");
    assert_eq!(to_value(&attachment)["attachments"][0]["text"], "body");

    let mut embed = PayloadBuilder::for_embed_style();
    embed.set_description("body");
    assert_eq!(to_value(&embed)["embeds"][0]["description"], "body");
}

#[test]
fn scalar_setters_are_last_write_wins() {
    let mut builder = PayloadBuilder::for_embed_style();
    builder
        .set_title("first")
        .set_description("first")
        .set_color("#000000")
        .set_text("first")
        .set_image("https://a.example/1.png")
        .set_thumbnail("https://a.example/1.png")
        .set_username("first")
        .set_url("https://a.example/first");
    builder
        .set_title("second")
        .set_description("second")
        .set_color(Color::new(0, 255, 0))
        .set_text("second")
        .set_image("https://a.example/2.png")
        .set_thumbnail("https://a.example/3.png")
        .set_username("second")
        .set_url("https://a.example/second");

    let payload = builder.build();
    let section = &payload.section;
    assert_eq!(payload.text.as_deref(), Some("second"));
    assert_eq!(payload.username.as_deref(), Some("second"));
    assert_eq!(payload.url.as_deref(), Some("https://a.example/second"));
    assert_eq!(section.title.as_deref(), Some("second"));
    assert_eq!(section.description.as_deref(), Some("second"));
    assert_eq!(section.color.as_deref(), Some("#00ff00"));
    assert_eq!(section.image.as_ref().unwrap().url, "https://a.example/2.png");
    assert_eq!(section.thumbnail.as_ref().unwrap().url, "https://a.example/3.png");
}

#[test]
fn color_is_not_validated() {
    let mut builder = PayloadBuilder::for_attachment_style();
    builder.set_color("definitely not hex");
    assert_eq!(
        builder.payload().section.color.as_deref(),
        Some("definitely not hex")
    );
}

#[test]
fn fields_keep_insertion_order_and_default_to_not_inline() {
    let mut builder = PayloadBuilder::for_attachment_style();
    builder.add_field("a", "1", None).add_field("b", "2", None);

    assert_eq!(
        builder.payload().section.fields,
        vec![field("a", "1", false), field("b", "2", false)]
    );
}

#[test]
fn add_field_does_not_deduplicate() {
    let mut builder = PayloadBuilder::for_embed_style();
    builder
        .add_field("a", "1", None)
        .add_field("a", "1", None)
        .add_field("a", "2", Some(false));
    assert_eq!(builder.payload().section.fields.len(), 3);
}

#[test]
fn remove_field_drops_every_match() {
    let mut builder = PayloadBuilder::for_attachment_style();
    builder
        .add_field("dup", "1", None)
        .add_field("keep", "2", Some(true))
        .add_field("dup", "3", None)
        .add_field("Dup", "4", None)
        .remove_field("dup");

    assert_eq!(
        builder.payload().section.fields,
        vec![field("keep", "2", true), field("Dup", "4", false)]
    );
}

#[test]
fn remove_field_without_match_is_noop() {
    let mut builder = PayloadBuilder::for_embed_style();
    builder.add_field("a", "1", None);
    let before = builder.clone();
    builder.remove_field("missing");
    assert_eq!(builder, before);
}

#[test]
fn set_author_replaces_wholesale() {
    let mut builder = PayloadBuilder::for_embed_style();
    builder.set_author("N", None, Some("https://a.example/icon.png"));
    builder.set_author("M", Some("u"), None);

    assert_eq!(
        to_value(&builder)["embeds"][0]["author"],
        json!({"name": "M", "url": "u"})
    );
}

#[test]
fn set_author_keeps_empty_strings() {
    let mut builder = PayloadBuilder::for_attachment_style();
    builder.set_author("N", Some(""), None);
    assert_eq!(
        to_value(&builder)["attachments"][0]["author"],
        json!({"name": "N", "url": ""})
    );
}

#[test]
fn footer_replaces_wholesale() {
    let mut builder = PayloadBuilder::for_embed_style();
    builder
        .add_footer("old", Some("https://a.example/icon.png"))
        .add_footer("new", None);

    assert_eq!(to_value(&builder)["embeds"][0]["footer"], json!({"text": "new"}));
}

#[test]
fn full_embed_payload() {
    let mut builder = PayloadBuilder::for_embed_style();
    builder
        .set_username("bot")
        .set_url("https://a.example")
        .set_text("hello")
        .set_title("t")
        .set_description("d")
        .set_color("#123456")
        .set_author("a", Some("https://a.example/a"), Some("https://a.example/a.png"))
        .set_image("https://a.example/i.png")
        .set_thumbnail("https://a.example/t.png")
        .add_footer("f", Some("https://a.example/f.png"))
        .add_field("k", "v", None)
        .set_time(Some(0.0))
        .unwrap();

    assert_eq!(
        to_value(&builder),
        json!({
            "text": "hello",
            "username": "bot",
            "url": "https://a.example",
            "embeds": [{
                "title": "t",
                "description": "d",
                "color": "#123456",
                "author": {
                    "name": "a",
                    "url": "https://a.example/a",
                    "icon_url": "https://a.example/a.png"
                },
                "timestamp": "1970-01-01T00:00:00.000Z",
                "image": {"url": "https://a.example/i.png"},
                "thumbnail": {"url": "https://a.example/t.png"},
                "footer": {"text": "f", "icon_url": "https://a.example/f.png"},
                "fields": [{"name": "k", "value": "v", "inline": false}]
            }]
        })
    );
}

#[test]
fn explicit_time_uses_dialect_encoding() {
    let mut attachment = PayloadBuilder::for_attachment_style();
    attachment.set_time(Some(1_704_067_200.5)).unwrap();
    assert_eq!(
        to_value(&attachment)["attachments"][0]["ts"],
        json!(1_704_067_200.5)
    );

    let mut embed = PayloadBuilder::for_embed_style();
    embed.set_time(Some(1_704_067_200.5)).unwrap();
    assert_eq!(
        to_value(&embed)["embeds"][0]["timestamp"],
        "2024-01-01T00:00:00.500Z"
    );
}

#[test]
fn zero_is_an_explicit_timestamp() {
    let mut builder = PayloadBuilder::for_attachment_style();
    builder.set_time(Some(0.0)).unwrap();
    assert_eq!(builder.payload().section.timestamp, Some(0.0));
}

#[test]
fn current_time_is_non_decreasing() {
    // Both values have millisecond precision, so back-to-back calls may be equal.
    let mut attachment = PayloadBuilder::for_attachment_style();
    let first = attachment.set_time(None).unwrap().payload().section.timestamp;
    let second = attachment.set_time(None).unwrap().payload().section.timestamp;
    assert!(first.unwrap() <= second.unwrap());

    let mut embed = PayloadBuilder::for_embed_style();
    let first = embed.set_time(None).unwrap().payload().section.timestamp.clone();
    let second = embed.set_time(None).unwrap().payload().section.timestamp.clone();
    // Fixed-width ISO-8601 UTC strings order the same way as the instants.
    assert!(first.unwrap() <= second.unwrap());
}

#[test]
fn invalid_time_leaves_builder_untouched() {
    let mut builder = PayloadBuilder::<Attachment>::new();
    builder.set_time(Some(10.0)).unwrap();

    let err = builder.set_time(Some(f64::NAN)).unwrap_err();
    assert!(matches!(err, BuildError::InvalidArgument(_)));
    assert_eq!(builder.payload().section.timestamp, Some(10.0));

    let mut embed = PayloadBuilder::<Embed>::new();
    assert!(embed.set_time(Some(1e300)).is_err());
    assert_eq!(embed.payload().section.timestamp, None);
}

#[test]
fn to_json_renders_compact_document() {
    let mut builder = PayloadBuilder::for_attachment_style();
    builder.set_text("hi");
    assert_eq!(
        builder.payload().to_json().unwrap(),
        r#"{"text":"hi","attachments":[{"fields":[]}]}"#
    );
    assert!(builder.payload().to_json_pretty().unwrap().contains('\n'));
}
