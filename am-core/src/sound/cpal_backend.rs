//! cpal output backend
//!
//! The cpal stream lives on its own `am-audio` thread for its whole life (it
//! is not `Send` on every platform). Tones are pushed straight into a shared
//! [`Mixer`]; the output callback pulls samples from it.
//!
//! ```text
//!  play_tone() ──▶ Arc<Mutex<Mixer>> ◀── output callback (device thread)
//!  resume()    ──▶ StreamCommand::Resume ──▶ am-audio thread: stream.play()
//! ```

use super::context::{AudioContext, AudioContextFactory, ContextState};
use super::synth::{Mixer, Voice};
use super::Tone;
use crate::error::AudioError;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, SizedSample};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

/// Opens the default output device
#[derive(Debug, Default, Clone, Copy)]
pub struct CpalContextFactory;

impl AudioContextFactory for CpalContextFactory {
    fn create(&self) -> Result<Arc<dyn AudioContext>, AudioError> {
        Ok(Arc::new(CpalContext::open()?))
    }
}

enum StreamCommand {
    Resume(Sender<Result<(), AudioError>>),
    Shutdown,
}

/// Audio context backed by a cpal output stream
pub struct CpalContext {
    mixer: Arc<Mutex<Mixer>>,
    sample_rate: f32,
    running: Arc<AtomicBool>,
    commands: Sender<StreamCommand>,
    worker_handle: Option<thread::JoinHandle<()>>,
}

impl CpalContext {
    /// Build the output stream on a dedicated thread and start it
    pub fn open() -> Result<Self, AudioError> {
        let mixer = Arc::new(Mutex::new(Mixer::new()));
        let running = Arc::new(AtomicBool::new(false));
        let (command_tx, command_rx) = unbounded();
        let (ready_tx, ready_rx) = bounded(1);

        let thread_mixer = mixer.clone();
        let thread_running = running.clone();
        let worker_handle = thread::Builder::new()
            .name("am-audio".into())
            .spawn(move || Self::run_audio_thread(thread_mixer, thread_running, command_rx, ready_tx))
            .map_err(|e| AudioError::Stream(format!("failed to spawn audio thread: {}", e)))?;

        let sample_rate = ready_rx.recv().map_err(|_| AudioError::ThreadStopped)??;
        ::log::info!("Audio context ready at {} Hz", sample_rate);

        Ok(Self {
            mixer,
            sample_rate,
            running,
            commands: command_tx,
            worker_handle: Some(worker_handle),
        })
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn run_audio_thread(
        mixer: Arc<Mutex<Mixer>>,
        running: Arc<AtomicBool>,
        commands: Receiver<StreamCommand>,
        ready: Sender<Result<f32, AudioError>>,
    ) {
        let stream = match Self::build_stream(mixer) {
            Ok((stream, sample_rate)) => {
                let _ = ready.send(Ok(sample_rate));
                stream
            }
            Err(e) => {
                let _ = ready.send(Err(e));
                return;
            }
        };

        // A stream that refuses to start stays suspended until resume()
        match stream.play() {
            Ok(()) => running.store(true, Ordering::Release),
            Err(e) => ::log::warn!("Audio stream did not start: {}", e),
        }

        for command in commands.iter() {
            match command {
                StreamCommand::Resume(reply) => {
                    let result = stream
                        .play()
                        .map(|()| running.store(true, Ordering::Release))
                        .map_err(|e| AudioError::Resume(e.to_string()));
                    let _ = reply.send(result);
                }
                StreamCommand::Shutdown => break,
            }
        }

        running.store(false, Ordering::Release);
        ::log::debug!("Audio thread stopped");
    }

    fn build_stream(mixer: Arc<Mutex<Mixer>>) -> Result<(cpal::Stream, f32), AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
        let supported = device
            .default_output_config()
            .map_err(|e| AudioError::Config(e.to_string()))?;

        let sample_rate = supported.sample_rate().0 as f32;
        let config: cpal::StreamConfig = supported.config();

        let stream = match supported.sample_format() {
            SampleFormat::F32 => Self::build_typed::<f32>(&device, &config, mixer),
            SampleFormat::I16 => Self::build_typed::<i16>(&device, &config, mixer),
            SampleFormat::U16 => Self::build_typed::<u16>(&device, &config, mixer),
            other => Err(AudioError::UnsupportedFormat(format!("{:?}", other))),
        }?;

        Ok((stream, sample_rate))
    }

    fn build_typed<T>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        mixer: Arc<Mutex<Mixer>>,
    ) -> Result<cpal::Stream, AudioError>
    where
        T: SizedSample + FromSample<f32>,
    {
        let channels = config.channels as usize;
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let mut mixer = mixer.lock();
                    for frame in data.chunks_mut(channels) {
                        let value = T::from_sample(mixer.next_sample());
                        for sample in frame.iter_mut() {
                            *sample = value;
                        }
                    }
                },
                |err| ::log::warn!("Audio stream error: {}", err),
                None,
            )
            .map_err(|e| AudioError::Stream(e.to_string()))
    }
}

impl AudioContext for CpalContext {
    fn state(&self) -> ContextState {
        if self.running.load(Ordering::Acquire) {
            ContextState::Running
        } else {
            ContextState::Suspended
        }
    }

    fn resume(&self) -> Result<(), AudioError> {
        let (reply_tx, reply_rx) = bounded(1);
        self.commands
            .send(StreamCommand::Resume(reply_tx))
            .map_err(|_| AudioError::ThreadStopped)?;
        reply_rx.recv().map_err(|_| AudioError::ThreadStopped)?
    }

    fn play_tone(&self, tone: &Tone) -> Result<(), AudioError> {
        self.mixer.lock().add(Voice::new(*tone, self.sample_rate));
        Ok(())
    }
}

impl Drop for CpalContext {
    fn drop(&mut self) {
        let _ = self.commands.send(StreamCommand::Shutdown);
        if let Some(handle) = self.worker_handle.take() {
            if handle.thread().id() != thread::current().id() {
                let _ = handle.join();
            }
        }
    }
}
