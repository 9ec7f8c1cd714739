//! Timer-driven blink animation, run on a paused tokio clock.

mod common;

use common::{DIM, GLOW, small_panel};
use lcd_panel::{Bitmap, Color};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_blink_start_stop_leaves_no_pixel_masked() {
    let (mut panel, canvas) = small_panel();
    panel.draw_character(&Bitmap::parse("10100").unwrap()).unwrap();
    panel.refresh();

    panel.set_blinking(true).unwrap();
    tokio::time::sleep(Duration::from_millis(650)).await;
    assert!(canvas.shapes().iter().all(|s| s.fill == Color::BLANK));

    panel.set_blinking(false).unwrap();
    assert!(!panel.is_blinking());
    for pixel in panel.grid().iter() {
        let shape = canvas.shape(&pixel.name()).unwrap();
        assert_eq!(shape.fill, pixel.color(), "{}", pixel.name());
    }
    assert_eq!(canvas.to_text("G:0:0:", GLOW), "#.#..\n.....");
}

#[tokio::test(start_paused = true)]
async fn test_stopping_twice_is_harmless() {
    let (mut panel, _) = small_panel();
    panel.set_blinking(true).unwrap();
    panel.set_blinking(false).unwrap();
    panel.set_blinking(false).unwrap();
    assert!(!panel.is_blinking());

    // restarting after a stop works
    panel.set_blinking(true).unwrap();
    assert!(panel.is_blinking());
}

#[tokio::test(start_paused = true)]
async fn test_blink_period_follows_config() {
    let config = common::small_config().with_blink_interval_ms(200);
    let (mut panel, canvas) =
        common::panel_on_canvas(lcd_panel::PanelLayout::new(config, (0, 0)));

    panel.set_blinking(true).unwrap();
    tokio::time::sleep(Duration::from_millis(210)).await;
    assert_eq!(canvas.shape("G:0:0:0:0").unwrap().fill, Color::BLANK);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(canvas.shape("G:0:0:0:0").unwrap().fill, DIM);
}

#[tokio::test(start_paused = true)]
async fn test_pixel_lit_mid_cycle_follows_its_own_mask() {
    let (mut panel, canvas) = small_panel();
    panel.set_blinking(true).unwrap();
    tokio::time::sleep(Duration::from_millis(610)).await;

    // masked phase: light a pixel and commit it
    panel.draw_character(&Bitmap::parse("10000").unwrap()).unwrap();
    panel.refresh();
    assert_eq!(canvas.shape("G:0:0:0:0").unwrap().fill, GLOW);

    // next tick unmasks everything, the new pixel stays lit
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(canvas.shape("G:0:0:0:0").unwrap().fill, GLOW);
    assert_eq!(canvas.shape("G:0:0:0:1").unwrap().fill, DIM);

    // and the one after masks it again
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(canvas.shape("G:0:0:0:0").unwrap().fill, Color::BLANK);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_panel_cancels_timer() {
    let (mut panel, canvas) = small_panel();
    panel.set_blinking(true).unwrap();
    drop(panel);

    tokio::time::sleep(Duration::from_millis(1300)).await;
    assert!(canvas.shapes().iter().all(|s| s.updates == 0));
}

#[test]
fn test_host_driven_blink_without_runtime() {
    let (mut panel, canvas) = small_panel();
    panel.blink_tick();
    assert!(canvas.shapes().iter().all(|s| s.fill == Color::BLANK));
    panel.blink_tick();
    assert!(canvas.shapes().iter().all(|s| s.fill == DIM));
}
