//! Timer-driven renderer tests on a paused clock.

use atelier_client::render::{
    TagAwareReveal, WaitingIndicator, failure_marker, indicator_text, markdown_to_html, reveal,
};
use atelier_client::{Exchange, Frame, GatewayReply, RecordingSurface, RenderOptions, RenderState};
use atelier_core::OperationKind;
use atelier_error::{ClientError, ClientErrorKind};
use std::{sync::Arc, time::Duration};
use strum::IntoEnumIterator;

fn is_tag_complete(frame: &str) -> bool {
    match frame.rfind('<') {
        None => true,
        Some(open) => frame[open..].contains('>'),
    }
}

fn markup_frames(frames: &[Frame]) -> Vec<String> {
    frames
        .iter()
        .filter_map(|f| match f {
            Frame::Markup(m) => Some(m.clone()),
            Frame::Text(_) => None,
        })
        .collect()
}

#[test]
fn test_reveal_commits_tags_atomically() {
    let frames: Vec<&str> = TagAwareReveal::new("<p><strong>hi</strong></p>").collect();
    assert_eq!(
        frames,
        [
            "<p>",
            "<p><strong>",
            "<p><strong>h",
            "<p><strong>hi",
            "<p><strong>hi</strong>",
            "<p><strong>hi</strong></p>",
        ]
    );
}

#[test]
fn test_reveal_never_shows_unterminated_tag() {
    let frames: Vec<&str> = TagAwareReveal::new("ab<img src=\"x").collect();
    assert_eq!(frames, ["a", "ab"]);
}

#[test]
fn test_reveal_handles_multibyte_text() {
    let frames: Vec<&str> = TagAwareReveal::new("é<br/>ü").collect();
    assert_eq!(frames, ["é", "é<br/>", "é<br/>ü"]);
}

#[test]
fn test_every_frame_of_rich_markdown_is_tag_complete() {
    let markdown = "# Title\n\n| a | b |\n|---|---|\n| **1** | ~~2~~ |\n\n- [x] done\n- [ ] todo\n\nSee [link](http://x.test) and `a < b`.\n";
    let html = markdown_to_html(markdown);
    let frames: Vec<&str> = TagAwareReveal::new(&html).collect();

    assert_eq!(frames.last().copied(), Some(html.as_str()));
    for frame in &frames {
        assert!(is_tag_complete(frame), "partial tag in {frame:?}");
        assert!(html.starts_with(frame));
    }
}

#[test]
fn test_markdown_extensions_enabled() {
    let html = markdown_to_html("| a |\n|---|\n| 1 |\n\n~~old~~\n\n- [x] done\n\n\n");
    assert!(html.contains("<table>"));
    assert!(html.contains("<del>old</del>"));
    assert!(html.contains("checkbox"));
    assert_eq!(html, html.trim_end());
    assert_eq!(markdown_to_html("**hi**"), "<p><strong>hi</strong></p>");
}

#[test]
fn test_artifact_markup() {
    let image = GatewayReply::Image {
        url: "img_1.png".to_string(),
    };
    assert_eq!(image.to_markup(), r#"<img src="img_1.png" class="preview" />"#);

    let audio = GatewayReply::Audio {
        url: "audio_1.wav".to_string(),
    };
    assert_eq!(audio.to_markup(), r#"<audio controls src="audio_1.wav"></audio>"#);
}

#[tokio::test(start_paused = true)]
async fn test_reveal_paces_frames() {
    let surface = RecordingSurface::new();
    let step = Duration::from_millis(18);
    let start = tokio::time::Instant::now();

    reveal(&surface, "<p>ok</p>", step).await;

    assert_eq!(start.elapsed(), step * 4);
    assert_eq!(
        markup_frames(&surface.frames()),
        ["", "<p>", "<p>o", "<p>ok", "<p>ok</p>"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_indicator_cycles_four_states_and_stops() {
    let surface = Arc::new(RecordingSurface::new());
    let indicator = WaitingIndicator::start(surface.clone(), Duration::from_millis(300));

    tokio::time::sleep(Duration::from_millis(1250)).await;
    indicator.cancel().await;

    let expected: Vec<Frame> = [0, 1, 2, 3, 0]
        .into_iter()
        .map(|n| Frame::Text(indicator_text(n)))
        .collect();
    assert_eq!(surface.frames(), expected);
    assert_eq!(indicator_text(0), "💭 ");
    assert_eq!(indicator_text(3), "💭 ...");

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(surface.frames().len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_chat_exchange_waits_then_reveals() {
    let surface = Arc::new(RecordingSurface::new());
    let mut exchange = Exchange::new(OperationKind::Chat, surface.clone(), RenderOptions::default());
    assert_eq!(exchange.state(), RenderState::Idle);

    let request = async {
        tokio::time::sleep(Duration::from_millis(1000)).await;
        Ok(GatewayReply::Markdown("**hi**".to_string()))
    };
    let state = exchange.run(request).await.unwrap();

    assert_eq!(state, RenderState::Settled);
    assert_eq!(exchange.state(), RenderState::Settled);

    let frames = surface.frames();
    let indicator: Vec<Frame> = (0..4).map(|n| Frame::Text(indicator_text(n))).collect();
    assert_eq!(frames[..4], indicator[..]);
    assert!(frames[4..].iter().all(|f| matches!(f, Frame::Markup(_))));
    assert_eq!(
        markup_frames(&frames),
        [
            "",
            "<p>",
            "<p><strong>",
            "<p><strong>h",
            "<p><strong>hi",
            "<p><strong>hi</strong>",
            "<p><strong>hi</strong></p>",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_failed_exchange_shows_marker_per_kind() {
    for kind in OperationKind::iter() {
        let surface = Arc::new(RecordingSurface::new());
        let mut exchange = Exchange::new(kind, surface.clone(), RenderOptions::default());

        let request = async {
            tokio::time::sleep(Duration::from_millis(450)).await;
            Err(ClientError::new(ClientErrorKind::Gateway {
                status: 500,
                message: "Model runtime returned 500: boom".to_string(),
            }))
        };
        let state = exchange.run(request).await.unwrap();

        assert_eq!(state, RenderState::Failed);
        let expected = format!("{}Model runtime returned 500: boom", failure_marker(kind));
        assert_eq!(surface.last(), Some(Frame::Text(expected)));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(surface.frames().len(), 3, "{kind}");
    }
    assert_eq!(failure_marker(OperationKind::Chat), "⚠️ Error: ");
    assert_eq!(failure_marker(OperationKind::ImageSynthesis), "⚠️ Image failed: ");
    assert_eq!(failure_marker(OperationKind::DocumentSummary), "❌ Failed: ");
    assert_eq!(failure_marker(OperationKind::SpeechSynthesis), "❌ TTS failed: ");
}

#[tokio::test(start_paused = true)]
async fn test_exchange_runs_once() {
    let surface = Arc::new(RecordingSurface::new());
    let mut exchange = Exchange::new(OperationKind::Chat, surface.clone(), RenderOptions::default());
    exchange
        .run(async { Ok(GatewayReply::Markdown("one".to_string())) })
        .await
        .unwrap();
    let before = surface.frames().len();

    let err = exchange
        .run(async { Ok(GatewayReply::Markdown("two".to_string())) })
        .await
        .unwrap_err();

    assert_eq!(err.kind, ClientErrorKind::ExchangeReused);
    assert_eq!(exchange.state(), RenderState::Settled);
    assert_eq!(surface.frames().len(), before);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_exchange_stops_indicator() {
    let surface = Arc::new(RecordingSurface::new());
    let mut exchange = Exchange::new(OperationKind::Chat, surface.clone(), RenderOptions::default());

    let never = std::future::pending::<Result<GatewayReply, ClientError>>();
    let timed_out = tokio::time::timeout(Duration::from_millis(650), exchange.run(never)).await;
    assert!(timed_out.is_err());
    assert_eq!(surface.frames().len(), 3);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(surface.frames().len(), 3);
}

#[test]
fn test_render_options_builder() {
    let defaults = RenderOptions::default();
    assert_eq!(*defaults.tick(), Duration::from_millis(300));
    assert_eq!(*defaults.reveal_step(), Duration::from_millis(18));

    let fast = RenderOptions::builder()
        .reveal_step(Duration::from_millis(1))
        .build()
        .unwrap();
    assert_eq!(*fast.tick(), Duration::from_millis(300));
    assert_eq!(*fast.reveal_step(), Duration::from_millis(1));
}
