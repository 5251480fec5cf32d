mod logging;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use webhook_payload::{Dialect, EmbedBuilder, Payload, PayloadBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Style {
    /// Legacy `{"attachments": [...]}` payload
    Attachment,
    /// `{"embeds": [...]}` payload
    Embed,
}

/// Builds a chat webhook payload and prints it as JSON
#[derive(Parser)]
struct Args {
    /// The payload dialect to produce
    #[arg(short, long, value_enum, default_value_t = Style::Embed)]
    style: Style,

    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long)]
    description: Option<String>,

    /// Plain message text sent alongside the attachment/embed
    #[arg(long)]
    text: Option<String>,

    /// Hexadecimal color, e.g. "#ff0000" (passed through unchecked)
    #[arg(short, long)]
    color: Option<String>,

    /// Author name
    #[arg(short, long)]
    author: Option<String>,

    #[arg(long, requires = "author")]
    author_url: Option<String>,

    #[arg(long, requires = "author")]
    author_icon: Option<String>,

    /// Image URL
    #[arg(long)]
    image: Option<String>,

    /// Thumbnail URL
    #[arg(long)]
    thumbnail: Option<String>,

    /// A field as LABEL=VALUE; may be repeated
    #[arg(short, long = "field", value_name = "LABEL=VALUE", value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// An inline field as LABEL=VALUE; may be repeated
    #[arg(long = "inline-field", value_name = "LABEL=VALUE", value_parser = parse_field)]
    inline_fields: Vec<(String, String)>,

    /// Set the timestamp to the given epoch seconds, or to now if no value is given
    #[arg(long, value_name = "SECS", num_args = 0..=1, allow_negative_numbers = true)]
    time: Option<Option<f64>>,

    /// Username override of the hook (embed only)
    #[arg(short, long)]
    username: Option<String>,

    /// URL override of the hook (embed only)
    #[arg(long)]
    url: Option<String>,

    /// Footer text (embed only)
    #[arg(long)]
    footer: Option<String>,

    #[arg(long, requires = "footer")]
    footer_icon: Option<String>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Log everything, including trace messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let json = match args.style {
        Style::Attachment => {
            reject_embed_only_options(&args)?;
            let mut builder = PayloadBuilder::for_attachment_style();
            apply_common(&mut builder, &args)?;
            render(builder.payload(), args.pretty)?
        }
        Style::Embed => {
            let mut builder = PayloadBuilder::for_embed_style();
            apply_common(&mut builder, &args)?;
            apply_embed_only(&mut builder, &args);
            render(builder.payload(), args.pretty)?
        }
    };

    println!("{json}");
    Ok(())
}

fn apply_common<D: Dialect>(builder: &mut PayloadBuilder<D>, args: &Args) -> Result<()> {
    if let Some(title) = &args.title {
        builder.set_title(title);
    }
    if let Some(description) = &args.description {
        builder.set_description(description);
    }
    if let Some(text) = &args.text {
        builder.set_text(text);
    }
    if let Some(color) = &args.color {
        builder.set_color(color);
    }
    if let Some(author) = &args.author {
        builder.set_author(
            author,
            args.author_url.as_deref(),
            args.author_icon.as_deref(),
        );
    }
    if let Some(image) = &args.image {
        builder.set_image(image);
    }
    if let Some(thumbnail) = &args.thumbnail {
        builder.set_thumbnail(thumbnail);
    }
    for (label, value) in &args.fields {
        builder.add_field(label, value, None);
    }
    for (label, value) in &args.inline_fields {
        builder.add_field(label, value, Some(true));
    }
    if let Some(time) = args.time {
        builder.set_time(time).context("Invalid --time value")?;
    }
    Ok(())
}

fn apply_embed_only(builder: &mut EmbedBuilder, args: &Args) {
    if let Some(username) = &args.username {
        builder.set_username(username);
    }
    if let Some(url) = &args.url {
        builder.set_url(url);
    }
    if let Some(footer) = &args.footer {
        builder.add_footer(footer, args.footer_icon.as_deref());
    }
}

fn reject_embed_only_options(args: &Args) -> Result<()> {
    let embed_only = [
        ("--username", args.username.is_some()),
        ("--url", args.url.is_some()),
        ("--footer", args.footer.is_some()),
    ];
    if let Some((flag, _)) = embed_only.iter().find(|(_, given)| *given) {
        bail!("{flag} is only supported for the embed style");
    }
    Ok(())
}

fn render<D: Dialect>(payload: &Payload<D>, pretty: bool) -> Result<String> {
    log::info!(
        "Built {} payload with {} field(s)",
        D::NAME,
        payload.section.fields.len()
    );
    let json = if pretty {
        payload.to_json_pretty()
    } else {
        payload.to_json()
    };
    json.context("Could not serialize payload")
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    let (label, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=VALUE, got {s:?}"))?;
    Ok((label.to_owned(), value.to_owned()))
}
