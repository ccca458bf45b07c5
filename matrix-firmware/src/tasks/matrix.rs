// Matrix Task - Ablauf aus Anzeige, Ton, Tastern und Temperatur
use defmt::info;
use embassy_futures::join::{join, join3};
use matrix_core::CancelToken;
use matrix_core::glyphs::{ARROW_RIGHT, HEART};

use crate::BoardDevice;
use crate::config::ALERT_TONE_HZ;

/// Matrix Logic - ein Durchlauf des Demo-Ablaufs
///
/// 1. Herz anzeigen und Ton ausgeben, bis irgendein Taster gedrückt wird
/// 2. Temperatur anzeigen, bis Taster A gedrückt wird
/// 3. Pfeil für ein Bild, dann von vorne
///
/// Jede Phase hat ihr eigenes Token; alle Futures einer Phase sind
/// beendet, bevor die nächste beginnt.
pub async fn matrix_app_logic(device: &BoardDevice) {
    // Phase 1: Herz + Ton
    info!("App: heart + {} Hz tone, waiting for any button", ALERT_TONE_HZ);
    let stop = CancelToken::new();
    device.set_matrix(&HEART);
    join3(
        device.display(&stop),
        device.buzz(&stop, ALERT_TONE_HZ),
        device.on_button_press(&stop),
    )
    .await;
    // Kurze Pause, damit der gehaltene Taster nicht sofort die nächste Phase beendet
    device.wait_settled(&stop).await;

    // Phase 2: Temperatur bis Taster A
    info!("App: temperature display, button A to stop");
    let stop = CancelToken::new();
    join(device.display_temp(&stop), device.on_button_a_press(&stop)).await;
    device.clear();
    device.wait_settled(&stop).await;

    // Phase 3: Übergang
    device.show_frame(&ARROW_RIGHT).await;
    device.clear();
}

/// Matrix Task - Embassy Task für den Demo-Ablauf
///
/// Der Device wurde in main() gebaut und lebt für die ganze Laufzeit.
#[embassy_executor::task]
pub async fn matrix_app_task(device: &'static BoardDevice) {
    info!("App: matrix task started");
    loop {
        matrix_app_logic(device).await;
    }
}
