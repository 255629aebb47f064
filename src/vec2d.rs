use std::fmt::{self, Debug, Formatter};
use std::ops::{Index, IndexMut};

use crate::data::Pos;

/// Fixed-size row-major grid.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vec2d<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Vec2d<T> {
    /// Returns `None` if `data` doesn't have exactly `width * height` cells.
    pub fn from_vec(data: Vec<T>, width: usize, height: usize) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Vec2d {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.data[self.index_of(pos)])
        } else {
            None
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (0..self.data.len()).map(move |i| Pos::new((i % width) as i32, (i / width) as i32))
    }

    pub fn cells(&self) -> &[T] {
        &self.data
    }

    pub fn scratchpad<U: Default + Clone>(&self) -> Vec2d<U> {
        self.scratchpad_with_default(U::default())
    }

    pub fn scratchpad_with_default<U: Clone>(&self, default: U) -> Vec2d<U> {
        Vec2d {
            data: vec![default; self.data.len()],
            width: self.width,
            height: self.height,
        }
    }

    fn index_of(&self, pos: Pos) -> usize {
        debug_assert!(self.contains(pos), "{:?} out of bounds", pos);
        pos.y as usize * self.width + pos.x as usize
    }
}

impl<T: Debug> Debug for Vec2d<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.width.max(1)) {
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.data[self.index_of(pos)]
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut Self::Output {
        let index = self.index_of(pos);
        &mut self.data[index]
    }
}
