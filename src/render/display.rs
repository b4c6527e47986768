/// 0RGB 幀緩衝區，格式與 minifb 相同
#[derive(Debug, Clone)]
pub struct Display {
    width: usize,
    height: usize,
    buffer: Vec<u32>,
}

impl Display {
    pub fn new(width: usize, height: usize, background: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// 設置像素，超出範圍時忽略
    pub fn set_pixel(&mut self, x: isize, y: isize, color: u32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x] = color;
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.buffer[y * self.width + x])
        } else {
            None
        }
    }

    /// 填充矩形，裁剪到緩衝區範圍
    pub fn fill_rect(&mut self, x: isize, y: isize, w: usize, h: usize, color: u32) {
        for dy in 0..h as isize {
            for dx in 0..w as isize {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// 一像素寬的矩形邊框
    pub fn stroke_rect(&mut self, x: isize, y: isize, w: usize, h: usize, color: u32) {
        if w == 0 || h == 0 {
            return;
        }
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y + h as isize - 1, w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x + w as isize - 1, y, 1, h, color);
    }

    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    pub fn count(&self, color: u32) -> usize {
        self.buffer.iter().filter(|&&px| px == color).count()
    }

    pub fn get_buffer(&self) -> &[u32] {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pixel_clips() {
        let mut display = Display::new(4, 3, 0xFFFFFF);
        display.set_pixel(-1, 0, 0);
        display.set_pixel(4, 0, 0);
        display.set_pixel(0, 3, 0);
        assert_eq!(display.count(0), 0);

        display.set_pixel(3, 2, 0x123456);
        assert_eq!(display.pixel(3, 2), Some(0x123456));
        assert_eq!(display.pixel(4, 2), None);
    }

    #[test]
    fn test_stroke_rect() {
        let mut display = Display::new(5, 5, 0);
        display.stroke_rect(0, 0, 5, 5, 1);
        // 4 條邊共 16 個像素，中間 3x3 不變
        assert_eq!(display.count(1), 16);
        assert_eq!(display.pixel(2, 2), Some(0));

        display.clear(7);
        assert_eq!(display.count(7), 25);
    }
}
