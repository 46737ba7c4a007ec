use crate::{
    AWAITING_TRANSCRIPT_INFORMATION, CommandError, ControllerMessage, DEFAULT_TICK_INTERVAL,
    PROMPT_INFORMATION, Phase, RECORDING_INFORMATION, SessionController, tests::support::FakeInvoker,
};

use std::time::Duration;

use tokio::{sync::mpsc, time::Instant};

fn controller() -> (SessionController<FakeInvoker>, FakeInvoker) {
    let invoker = FakeInvoker::default();
    let controller = SessionController::new(invoker.clone(), DEFAULT_TICK_INTERVAL);
    (controller, invoker)
}

/// WHAT: A fresh controller shows the record prompt
/// WHY: The initial view is what the user sees before any interaction
#[tokio::test]
async fn given_new_controller_when_viewing_then_idle_prompt_shown() {
    // Given/When: A freshly created controller
    let (controller, _) = controller();

    // Then: Idle with the prompt, an empty transcript and a zeroed readout
    let view = controller.view();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.toggle_label(), "Record");
    assert_eq!(view.elapsed, "00:00");
    assert_eq!(view.information, PROMPT_INFORMATION);
    assert!(view.error.is_empty());
    assert!(view.transcript.is_empty());
    assert!(!controller.is_recording());
}

/// WHAT: Successful start enters Recording and clears the previous transcript
/// WHY: Each session begins with an empty transcript and a zeroed readout
#[tokio::test]
async fn given_idle_when_start_succeeds_then_recording_with_cleared_transcript() {
    // Given: An idle controller holding text from an earlier session
    let (mut controller, invoker) = controller();
    controller.append_partial("earlier text");

    // When: Starting a recording
    controller.start_recording().await;

    // Then: Recording, ticking, transcript cleared
    let view = controller.view();
    assert!(controller.is_recording());
    assert_eq!(view.phase, Phase::Recording);
    assert_eq!(view.toggle_label(), "Stop");
    assert_eq!(view.elapsed, "00:00");
    assert_eq!(view.information, RECORDING_INFORMATION);
    assert!(view.transcript.is_empty());
    assert_eq!(invoker.start_calls(), 1);
}

/// WHAT: A PlayStream rejection keeps the session idle and shows the device error
/// WHY: A device that never opened must not leave a ticking timer behind
#[tokio::test]
async fn given_device_busy_when_starting_then_idle_with_error() {
    // Given: A backend whose device is busy, and a transcript from before
    let (mut controller, invoker) = controller();
    controller.append_partial("kept");
    invoker.fail_next_start(CommandError::PlayStream {
        message: "device busy".to_string(),
    });

    // When: Starting a recording
    controller.start_recording().await;

    // Then: Still idle, no ticker, exact error, transcript untouched
    let view = controller.view();
    assert!(!controller.is_recording());
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.error, "Error starting audio: device busy");
    assert_eq!(view.information, PROMPT_INFORMATION);
    assert_eq!(view.transcript.as_str(), "kept");
}

/// WHAT: Non-device start failures are surfaced the same way
/// WHY: Command failures never disappear silently
#[tokio::test]
async fn given_transport_failure_when_starting_then_error_surfaced() {
    // Given: A backend that cannot be reached
    let (mut controller, invoker) = controller();
    invoker.fail_next_start(CommandError::Transport {
        message: "ipc closed".to_string(),
    });

    // When: Starting a recording
    controller.start_recording().await;

    // Then: Idle with the transport error
    assert!(!controller.is_recording());
    assert_eq!(controller.view().error, "Error reaching backend: ipc closed");
}

/// WHAT: Elapsed readout is derived from the start time on each tick
/// WHY: Late or skipped ticks must not make the clock drift
#[tokio::test(start_paused = true)]
async fn given_recording_when_ticked_after_125s_then_reads_02_05() {
    // Given: A recording session
    let (mut controller, _) = controller();
    controller.start_recording().await;

    // When: Ticking 125 seconds later
    tokio::time::advance(Duration::from_secs(125)).await;
    controller.tick(Instant::now());

    // Then: Readout shows minutes and seconds
    assert_eq!(controller.view().elapsed, "02:05");
}

/// WHAT: Ticks outside a recording change nothing
/// WHY: The readout is only live while recording
#[tokio::test]
async fn given_idle_when_ticked_then_readout_unchanged() {
    // Given: An idle controller
    let (mut controller, _) = controller();
    let before = controller.view().clone();

    // When: A stray tick arrives
    controller.tick(Instant::now() + Duration::from_secs(30));

    // Then: Nothing changed
    assert_eq!(*controller.view(), before);
}

/// WHAT: Full happy path accumulates partials and resets the readouts on stop
/// WHY: Partial events are the source of truth for the final transcript
#[tokio::test]
async fn given_partials_when_stop_succeeds_then_transcript_kept_and_ui_reset() {
    // Given: A recording that received two fragments
    let (mut controller, invoker) = controller();
    controller.start_recording().await;
    controller.append_partial("hello");
    controller.append_partial("world");

    // When: Stopping succeeds
    controller.stop_recording().await;

    // Then: Transcript kept, readouts reset
    let view = controller.view();
    assert!(!controller.is_recording());
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.transcript.as_str(), "hello world");
    assert_eq!(view.elapsed, "00:00");
    assert!(view.information.is_empty());
    assert_eq!(invoker.stop_calls(), 1);
}

/// WHAT: Encoding failures on stop still return the session to idle
/// WHY: The backend recording has already ended
#[tokio::test]
async fn given_hound_failure_when_stopping_then_idle_with_error() {
    // Given: A recording whose encoding will fail
    let (mut controller, invoker) = controller();
    controller.start_recording().await;
    invoker.fail_next_stop(CommandError::Hound {
        message: "disk full".to_string(),
    });

    // When: Stopping
    controller.stop_recording().await;

    // Then: Idle, ticker gone, error shown
    let view = controller.view();
    assert!(!controller.is_recording());
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.elapsed, "00:00");
    assert_eq!(view.error, "Error encoding audio: disk full");
}

/// WHAT: Transcription failures on stop still return the session to idle
/// WHY: The backend recording has already ended
#[tokio::test]
async fn given_transcript_failure_when_stopping_then_idle_with_error() {
    // Given: A recording whose transcription will fail
    let (mut controller, invoker) = controller();
    controller.start_recording().await;
    controller.append_partial("partial");
    invoker.fail_next_stop(CommandError::Transcript {
        message: "quota exceeded".to_string(),
    });

    // When: Stopping
    controller.stop_recording().await;

    // Then: Idle, error shown, streamed text kept
    let view = controller.view();
    assert!(!controller.is_recording());
    assert_eq!(view.error, "Transcription error: quota exceeded");
    assert_eq!(view.transcript.as_str(), "partial");
    assert!(view.information.is_empty());
}

/// WHAT: A stream-stop failure keeps the session recording so stop can be retried
/// WHY: The backend is still capturing audio after a failed stream stop
#[tokio::test]
async fn given_stop_stream_failure_when_stopping_then_still_recording_and_retry_works() {
    // Given: A recording whose first stop fails to stop the stream
    let (mut controller, invoker) = controller();
    controller.start_recording().await;
    invoker.fail_next_stop(CommandError::StopStream {
        message: "device lost".to_string(),
    });

    // When: Stopping once
    controller.stop_recording().await;

    // Then: Still recording with the error shown
    assert!(controller.is_recording());
    assert_eq!(controller.view().phase, Phase::Recording);
    assert_eq!(controller.view().error, "Error stopping audio: device lost");
    assert_eq!(controller.view().information, RECORDING_INFORMATION);

    // When: Retrying the stop
    controller.stop_recording().await;

    // Then: Normal reset, error persists until overwritten
    assert!(!controller.is_recording());
    assert_eq!(controller.view().phase, Phase::Idle);
    assert_eq!(controller.view().error, "Error stopping audio: device lost");
    assert_eq!(invoker.stop_calls(), 2);
}

/// WHAT: Fatal backend errors are shown even while idle
/// WHY: The restart instruction must reach the user regardless of state
#[tokio::test]
async fn given_idle_when_recording_error_arrives_then_restart_message_shown() {
    // Given: An idle controller
    let (mut controller, _) = controller();

    // When: A fatal error arrives
    controller.recording_error("stream disconnected");

    // Then: Restart instruction shown
    assert_eq!(
        controller.view().error,
        "Error: stream disconnected. Please restart the client."
    );
    assert!(controller.view().restart_required);
}

/// WHAT: Out-of-state start and stop requests are ignored
/// WHY: Commands are only issued from the state that allows them
#[tokio::test]
async fn given_wrong_state_when_commanding_then_backend_not_called() {
    // Given: An idle controller
    let (mut controller, invoker) = controller();

    // When: Stopping while idle
    controller.stop_recording().await;

    // Then: No stop issued
    assert_eq!(invoker.stop_calls(), 0);

    // When: Starting twice
    controller.start_recording().await;
    controller.start_recording().await;

    // Then: Only one start issued
    assert_eq!(invoker.start_calls(), 1);
    assert!(controller.is_recording());
}

/// WHAT: Toggle alternates between start and stop
/// WHY: A single control drives the whole session
#[tokio::test]
async fn given_idle_when_toggled_twice_then_started_and_stopped() {
    // Given: An idle controller
    let (mut controller, invoker) = controller();

    // When/Then: First toggle starts
    controller.toggle().await;
    assert!(controller.is_recording());

    // When/Then: Second toggle stops
    controller.toggle().await;
    assert!(!controller.is_recording());
    assert_eq!(invoker.start_calls(), 1);
    assert_eq!(invoker.stop_calls(), 1);
}

/// WHAT: The event loop keeps the readout live and stops ticking after stop
/// WHY: No tick-driven update may happen once the ticker is cancelled
#[tokio::test(start_paused = true)]
#[allow(clippy::unwrap_used)]
async fn given_running_loop_when_recording_then_ticks_until_stopped() {
    // Given: A running controller loop
    let (controller, _) = controller();
    let mut views = controller.subscribe();
    let (inbox_tx, inbox_rx) = mpsc::channel(32);
    let task = tokio::spawn(controller.run(inbox_rx));

    // When: Recording for a little over two seconds
    inbox_tx.send(ControllerMessage::Toggle).await.unwrap();
    views.wait_for(|v| v.phase == Phase::Recording).await.unwrap();
    tokio::time::sleep(Duration::from_millis(2_100)).await;

    // Then: Readout follows the clock
    assert_eq!(views.borrow().elapsed, "00:02");

    // When: Stopping and letting more time pass
    inbox_tx.send(ControllerMessage::Toggle).await.unwrap();
    views.wait_for(|v| v.phase == Phase::Idle).await.unwrap();
    views.borrow_and_update();
    tokio::time::sleep(Duration::from_secs(5)).await;

    // Then: No further updates, readout reset
    assert!(!views.has_changed().unwrap());
    assert_eq!(views.borrow().elapsed, "00:00");

    inbox_tx.send(ControllerMessage::Shutdown).await.unwrap();
    task.await.unwrap();
}

/// WHAT: The awaiting-result message is published before stop resolves
/// WHY: The user sees progress while the backend transcribes
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_slow_stop_when_stopping_then_awaiting_message_shown_first() {
    // Given: A running loop whose stop blocks until released
    let (controller, invoker) = controller();
    let gate = invoker.gate_stop();
    let mut views = controller.subscribe();
    let (inbox_tx, inbox_rx) = mpsc::channel(32);
    let task = tokio::spawn(controller.run(inbox_rx));
    inbox_tx.send(ControllerMessage::Toggle).await.unwrap();
    views.wait_for(|v| v.phase == Phase::Recording).await.unwrap();

    // When: Stopping
    inbox_tx.send(ControllerMessage::Toggle).await.unwrap();

    // Then: Awaiting message appears while still recording
    views
        .wait_for(|v| v.information == AWAITING_TRANSCRIPT_INFORMATION)
        .await
        .unwrap();
    assert_eq!(views.borrow().phase, Phase::Recording);

    // When: The backend finishes
    gate.notify_one();

    // Then: Session resets
    views.wait_for(|v| v.phase == Phase::Idle).await.unwrap();
    assert!(views.borrow().information.is_empty());

    inbox_tx.send(ControllerMessage::Shutdown).await.unwrap();
    task.await.unwrap();
}

/// WHAT: Inbox messages are applied in arrival order and shutdown ends the loop
/// WHY: Fragment order must be preserved end to end
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_running_loop_when_partials_queued_then_applied_in_order() {
    // Given: A running, recording controller loop
    let (controller, _) = controller();
    let mut views = controller.subscribe();
    let (inbox_tx, inbox_rx) = mpsc::channel(32);
    let task = tokio::spawn(controller.run(inbox_rx));
    inbox_tx.send(ControllerMessage::Toggle).await.unwrap();

    // When: Three fragments arrive, then shutdown
    for fragment in ["one", "two", "three"] {
        inbox_tx
            .send(ControllerMessage::PartialTranscript(fragment.to_string()))
            .await
            .unwrap();
    }
    views
        .wait_for(|v| v.transcript.as_str() == "one two three")
        .await
        .unwrap();
    inbox_tx.send(ControllerMessage::Shutdown).await.unwrap();

    // Then: Loop exits even though it was recording
    task.await.unwrap();
    assert!(views.has_changed().is_err());
}
