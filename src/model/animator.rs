use super::constants::*;
use super::diagram::Diagram;
use super::hex::{HexField, HexLayout};
use super::surface::{Color, DrawSurface, Pen};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// How neighbour averages see cells already updated during the same tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateOrder {
    /// Every cell reads the previous tick's values.
    #[default]
    DoubleBuffered,
    /// Row-major pass that mutates in place; later cells see earlier updates.
    InPlace,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HexConfig {
    pub hex_size: f64,
    pub dot_size: f64,
    pub decay_factor: f64,
    pub link_factor: f64,
    pub charge_radius: f64,
    pub mouse_charge_strength: f64,
    pub update_order: UpdateOrder,
    pub reset_pointer_on_leave: bool,
}

impl Default for HexConfig {
    fn default() -> Self {
        Self {
            hex_size: HEX_SIZE,
            dot_size: DOT_SIZE,
            decay_factor: DECAY_FACTOR,
            link_factor: LINK_FACTOR,
            charge_radius: CHARGE_RADIUS,
            mouse_charge_strength: MOUSE_CHARGE_STRENGTH,
            update_order: UpdateOrder::DoubleBuffered,
            reset_pointer_on_leave: true,
        }
    }
}

/// Hex lattice whose brightness decays, diffuses between neighbours and is
/// recharged around the pointer.
pub struct HexAnimator {
    config: HexConfig,
    layout: HexLayout,
    field: HexField,
    scratch: Vec<f64>,
    pointer: Option<DVec2>,
    viewport: (u32, u32),
    rng: StdRng,
    ticks: u64,
}

impl HexAnimator {
    pub fn new(config: HexConfig, seed: u64) -> Self {
        let layout = HexLayout::new(config.hex_size);
        Self {
            config,
            layout,
            field: HexField::default(),
            scratch: Vec::new(),
            pointer: None,
            viewport: (0, 0),
            rng: StdRng::seed_from_u64(seed),
            ticks: 0,
        }
    }

    pub fn config(&self) -> &HexConfig {
        &self.config
    }

    pub fn layout(&self) -> HexLayout {
        self.layout
    }

    pub fn field(&self) -> &HexField {
        &self.field
    }

    pub fn pointer(&self) -> Option<DVec2> {
        self.pointer
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Swap in a prepared field, keeping the current viewport.
    pub fn replace_field(&mut self, field: HexField) {
        self.field = field;
    }

    /// Rebuild and reseed the lattice for a new viewport, then draw it once.
    pub fn resize(&mut self, width: u32, height: u32, surface: &mut dyn DrawSurface) {
        self.reseed(width, height);
        self.render(surface);
    }

    pub fn reseed(&mut self, width: u32, height: u32) {
        let (rows, cols) = self.layout.dimensions_for(width, height);
        self.viewport = (width, height);
        self.field = HexField::random(rows, cols, &mut self.rng);
        log::debug!("[hex] resize {}x{} -> grid {}x{}", width, height, rows, cols);
    }

    pub fn set_pointer(&mut self, pos: Option<DVec2>) {
        self.pointer = pos;
    }

    /// One animation frame: advance the simulation, then redraw.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) {
        self.step();
        self.render(surface);
    }

    pub fn step(&mut self) {
        let rows = self.field.rows();
        let cols = self.field.cols();
        if let UpdateOrder::DoubleBuffered = self.config.update_order {
            self.scratch.clear();
            self.scratch.extend_from_slice(self.field.values());
        }
        for row in 0..rows {
            for col in 0..cols {
                let i = self.field.index(row, col);
                let (current, avg) = match self.config.update_order {
                    UpdateOrder::DoubleBuffered => (
                        self.scratch[i],
                        self.field.neighbor_average(&self.scratch, row, col),
                    ),
                    UpdateOrder::InPlace => (
                        self.field.values()[i],
                        self.field.neighbor_average(self.field.values(), row, col),
                    ),
                };
                let next = self.relax(current, avg, self.layout.cell_center(row, col));
                self.field.values_mut()[i] = next;
            }
        }
        self.ticks += 1;
    }

    /// Decay, neighbour pull and pointer charge for a single cell.
    fn relax(&self, current: f64, neighbor_avg: f64, center: DVec2) -> f64 {
        let c = &self.config;
        let mut b = current * (1.0 - c.decay_factor) * (1.0 - c.link_factor);
        b += neighbor_avg * c.link_factor;
        b = b.clamp(0.0, 1.0);
        if let Some(p) = self.pointer {
            if center.distance(p) < c.charge_radius {
                b = (b + c.mouse_charge_strength).min(1.0);
            }
        }
        b
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let (w, h) = self.viewport;
        surface.clear(w as f64, h as f64);

        let spokes = self.spoke_offsets();
        let spoke_pen = Pen::solid(Color::BLACK, SPOKE_WIDTH);
        for row in 0..self.field.rows() {
            for col in 0..self.field.cols() {
                let center = self.layout.cell_center(row, col);
                let b = self.field.values()[self.field.index(row, col)];
                if b > 0.0 {
                    surface.fill_circle(center, self.config.dot_size * b, Color::RED);
                }
                for offset in spokes {
                    surface.stroke_line(center, center + offset, spoke_pen);
                }
            }
        }

        if let Some(p) = self.pointer {
            surface.stroke_circle(p, self.config.charge_radius, Pen::default());
        }
    }

    fn spoke_offsets(&self) -> [DVec2; 3] {
        let len = self.config.hex_size * SPOKE_LENGTH_FACTOR;
        SPOKE_ANGLES_DEG.map(|deg| {
            let a = deg.to_radians();
            DVec2::new(a.cos(), a.sin()) * len
        })
    }

    pub fn mean_brightness(&self) -> f64 {
        if self.field.is_empty() {
            return 0.0;
        }
        self.field.values().iter().sum::<f64>() / self.field.len() as f64
    }
}

impl Diagram for HexAnimator {
    fn logical_size(&self) -> DVec2 {
        DVec2::new(self.viewport.0 as f64, self.viewport.1 as f64)
    }

    fn pointer_move(&mut self, pos: DVec2) {
        self.pointer = Some(pos);
    }

    fn pointer_leave(&mut self) {
        if self.config.reset_pointer_on_leave {
            self.pointer = None;
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        self.render(surface);
    }
}
