// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Frame-time accumulation into frames-per-second samples.

use std::time::Duration;

/// Number of past frame-rate samples kept for reporting.
const HISTORY_LEN: usize = 16;

/// A fixed-size circular buffer for storing numerical samples.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    data: [T; N],
    index: usize,
    count: usize,
}

impl<T: Default + Copy, const N: usize> RingBuffer<T, N> {
    /// Creates a new, empty ring buffer.
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            index: 0,
            count: 0,
        }
    }

    /// Pushes a new value into the buffer, overwriting the oldest if full.
    pub fn push(&mut self, value: T) {
        self.data[self.index] = value;
        self.index = (self.index + 1) % N;
        if self.count < N {
            self.count += 1;
        }
    }

    /// Returns the number of elements currently in the buffer.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The most recently pushed value.
    pub fn latest(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.data[(self.index + N - 1) % N])
        }
    }

    /// Returns an iterator over the values from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (left, right) = self.data.split_at(self.index);
        if self.count < N {
            right[N - self.index..]
                .iter()
                .chain(left[..self.index].iter())
        } else {
            right.iter().chain(left.iter())
        }
    }
}

impl<T: Default + Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> RingBuffer<f32, N> {
    /// Calculates the arithmetic mean of the values in the buffer.
    pub fn average(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.iter().sum::<f32>() / self.count as f32
    }

    /// Returns the minimum value in the buffer, or `f32::MAX` if empty.
    pub fn min(&self) -> f32 {
        self.iter().copied().fold(f32::MAX, f32::min)
    }
}

/// Counts frames over fixed windows and reports one frame rate per window.
#[derive(Debug, Clone)]
pub struct FrameRateMeter {
    window: Duration,
    elapsed: Duration,
    frames: u32,
    history: RingBuffer<f32, HISTORY_LEN>,
}

impl FrameRateMeter {
    /// Creates a meter that samples every `window`.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            elapsed: Duration::ZERO,
            frames: 0,
            history: RingBuffer::new(),
        }
    }

    /// Records one frame that took `frame_time`.
    ///
    /// Returns the frame rate of the window when this frame completes it.
    pub fn record(&mut self, frame_time: Duration) -> Option<f32> {
        self.elapsed += frame_time;
        self.frames += 1;
        if self.elapsed < self.window {
            return None;
        }

        let fps = self.frames as f32 / self.elapsed.as_secs_f32();
        self.history.push(fps);
        self.elapsed = Duration::ZERO;
        self.frames = 0;
        Some(fps)
    }

    /// The last completed sample.
    pub fn latest(&self) -> Option<f32> {
        self.history.latest()
    }

    /// Recent samples, oldest first.
    pub fn history(&self) -> &RingBuffer<f32, HISTORY_LEN> {
        &self.history
    }
}

impl Default for FrameRateMeter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ring_buffer_push_and_iter() {
        let mut rb = RingBuffer::<f32, 3>::new();
        rb.push(1.0);
        rb.push(2.0);
        rb.push(3.0);
        rb.push(4.0); // Overwrites 1.0

        let values: Vec<f32> = rb.iter().copied().collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(rb.count(), 3);
        assert_eq!(rb.latest(), Some(4.0));
        assert_relative_eq!(rb.average(), 3.0);
        assert_relative_eq!(rb.min(), 2.0);
    }

    #[test]
    fn test_meter_reports_once_per_window() {
        let mut meter = FrameRateMeter::new(Duration::from_millis(100));
        let frame = Duration::from_millis(10);
        for _ in 0..9 {
            assert_eq!(meter.record(frame), None);
        }
        let fps = meter.record(frame).unwrap();
        assert_relative_eq!(fps, 100.0, epsilon = 1e-3);
        assert_eq!(meter.record(frame), None);
        assert_eq!(meter.history().count(), 1);
    }

    #[test]
    fn test_long_frame_closes_the_window() {
        let mut meter = FrameRateMeter::default();
        let fps = meter.record(Duration::from_secs(2)).unwrap();
        assert_relative_eq!(fps, 0.5);
        assert_eq!(meter.latest(), Some(0.5));
    }
}
