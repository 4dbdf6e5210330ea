use crate::core_modules::grid_manager::GridManager;
use crate::error::{PxlError, Result};
use crate::pipeline::PipelineConfig;
use futures::future::try_join_all;
use image::{RgbaImage, imageops};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error};

const CHANNELS: usize = 4;

/// One row of blocks, cut out of the source image.
pub struct BandTask {
    pub band: RgbaImage,
    pub band_index: u32,
    pub result_sender: oneshot::Sender<RgbaImage>,
}

pub struct WorkerPool {
    task_sender: mpsc::UnboundedSender<BandTask>,
    workers: Vec<tokio::task::JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `worker_count` workers plus a round-robin dispatcher. Must be
    /// called from within a tokio runtime.
    pub fn new(config: PipelineConfig, worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<BandTask>();
        let mut workers = Vec::with_capacity(worker_count);

        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<BandTask>())
            .unzip();

        let dispatcher_senders = worker_senders;
        tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                let _ = dispatcher_senders[worker_idx].send(task);
                worker_idx = (worker_idx + 1) % dispatcher_senders.len();
            }
        });

        for mut worker_receiver in worker_receivers {
            let worker = tokio::spawn(async move {
                while let Some(task) = worker_receiver.recv().await {
                    let BandTask {
                        mut band,
                        band_index,
                        result_sender,
                    } = task;

                    // Block scanning is CPU-bound and runs on the blocking pool.
                    let painted = tokio::task::spawn_blocking(move || {
                        let grid = GridManager::new(band.width(), band.height(), config.block_size, config.split_mode);
                        grid.process_image(&mut band);
                        band
                    })
                    .await;

                    match painted {
                        Ok(band) => {
                            debug!(band = band_index, "band processed");
                            let _ = result_sender.send(band);
                        }
                        // Dropping the sender surfaces as a WorkerPool error in `process_band`.
                        Err(err) => error!(band = band_index, %err, "band task failed"),
                    }
                }
            });

            workers.push(worker);
        }

        Self {
            task_sender,
            workers,
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub async fn process_band(&self, band: RgbaImage, band_index: u32) -> Result<RgbaImage> {
        let (result_sender, result_receiver) = oneshot::channel();

        let task = BandTask {
            band,
            band_index,
            result_sender,
        };

        self.task_sender
            .send(task)
            .map_err(|_| PxlError::WorkerPool("failed to send band to worker pool".into()))?;

        result_receiver
            .await
            .map_err(|_| PxlError::WorkerPool(format!("worker dropped band {band_index}")))
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        for worker in &self.workers {
            worker.abort();
        }
    }
}

/// Block-row parallel version of [`crate::pipeline::PxlPipeline`].
///
/// Bands are exactly one block tall, so no block straddles two workers and the
/// output is pixel-identical to the sequential pipeline.
pub struct ParallelPipeline {
    config: PipelineConfig,
    worker_pool: WorkerPool,
}

impl ParallelPipeline {
    /// One worker per logical CPU.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::with_workers(config, num_cpus::get())
    }

    pub fn with_workers(config: PipelineConfig, worker_count: usize) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            worker_pool: WorkerPool::new(config, worker_count),
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn worker_count(&self) -> usize {
        self.worker_pool.worker_count()
    }

    pub async fn process(&self, mut image: RgbaImage) -> Result<RgbaImage> {
        let block_size = self.config.block_size;
        let (width, height) = image.dimensions();
        let band_count = height / block_size;
        let band_bytes = width as usize * block_size as usize * CHANNELS;

        debug!(width, height, band_count, workers = self.worker_count(), "dispatching bands");

        let mut pending = Vec::with_capacity(band_count as usize);
        for (band_index, bytes) in (0..band_count).zip(image.as_raw().chunks_exact(band_bytes.max(1))) {
            let band = RgbaImage::from_raw(width, block_size, bytes.to_vec())
                .ok_or_else(|| PxlError::WorkerPool(format!("band {band_index} has the wrong size")))?;
            pending.push(self.worker_pool.process_band(band, band_index));
        }

        let bands = try_join_all(pending).await?;

        for (band_index, band) in (0..band_count).zip(&bands) {
            let top = i64::from(band_index) * i64::from(block_size);
            imageops::replace(&mut image, band, 0, top);
        }

        Ok(image)
    }
}
