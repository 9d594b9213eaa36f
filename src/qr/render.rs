//! # 渲染模块
//!
//! ## 设计思路
//!
//! 二维码矩阵由 `qrcode` 库生成（纠错等级 M），本模块只负责把模块矩阵
//! 放大为目标像素尺寸的位图：按整数倍放大（至少 1 倍），四周保留
//! 两个模块宽的静区，保证扫码器可靠识别。
//!
//! ## 实现思路
//!
//! 先生成灰度缓冲（黑 0 / 白 255），PNG 编码走 L8 通道；
//! 剪贴板路径需要 RGBA，由灰度缓冲扩展得到。

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use qrcode::{Color, EcLevel, QrCode};

use super::error::QrError;

/// 缺省渲染尺寸（像素）。
pub const DEFAULT_QR_SIZE: u32 = 200;

/// 静区宽度（模块数）。
const QUIET_ZONE_MODULES: u32 = 2;

/// 生成灰度像素缓冲。
///
/// 返回 `(像素, 边长)`；边长为“(模块数 + 静区) × 放大倍数”，
/// 因此可能略小于请求尺寸，但保证是整模块倍数。
fn qr_luma(text: &str, size: u32) -> Result<(Vec<u8>, u32), QrError> {
    if text.is_empty() {
        return Err(QrError::Encode("内容为空，无法生成二维码".to_string()));
    }

    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)
        .map_err(|e| QrError::Encode(e.to_string()))?;

    let modules = code.width() as u32;
    let total_modules = modules + 2 * QUIET_ZONE_MODULES;
    let scale = (size / total_modules).max(1);
    let side = total_modules * scale;

    let mut pixels = vec![0xFFu8; (side * side) as usize];
    for (y, row) in code.to_colors().chunks(modules as usize).enumerate() {
        for (x, color) in row.iter().enumerate() {
            if !matches!(color, Color::Dark) {
                continue;
            }
            let origin_x = (x as u32 + QUIET_ZONE_MODULES) * scale;
            let origin_y = (y as u32 + QUIET_ZONE_MODULES) * scale;
            for dy in 0..scale {
                let row_start = ((origin_y + dy) * side + origin_x) as usize;
                for dx in 0..scale as usize {
                    pixels[row_start + dx] = 0x00;
                }
            }
        }
    }

    Ok((pixels, side))
}

/// 渲染为 PNG 字节流。
pub fn render_qr_png(text: &str, size: u32) -> Result<Vec<u8>, QrError> {
    let (pixels, side) = qr_luma(text, size)?;

    let mut buf = Vec::new();
    PngEncoder::new(&mut buf)
        .write_image(&pixels, side, side, ExtendedColorType::L8)
        .map_err(|e| QrError::Image(format!("PNG 编码失败: {e}")))?;

    log::debug!("🧾 二维码渲染完成：{side}x{side}，{} 字节", buf.len());
    Ok(buf)
}

/// 渲染为 RGBA 缓冲（剪贴板图像写入用）。
///
/// 返回 `(像素, 边长)`，像素为不透明的黑白四通道。
pub fn render_qr_rgba(text: &str, size: u32) -> Result<(Vec<u8>, u32), QrError> {
    let (luma, side) = qr_luma(text, size)?;
    let mut rgba = Vec::with_capacity(luma.len() * 4);
    for value in luma {
        rgba.extend_from_slice(&[value, value, value, 0xFF]);
    }
    Ok((rgba, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "B_BR001_Patient001-SL_001-ST_T1-SE_001";

    #[test]
    fn test_png_output_has_signature() {
        let png = render_qr_png(SAMPLE, DEFAULT_QR_SIZE).expect("渲染应当成功");
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn test_luma_buffer_is_square_module_multiple() {
        let (pixels, side) = qr_luma(SAMPLE, DEFAULT_QR_SIZE).expect("渲染应当成功");
        assert_eq!(pixels.len() as u32, side * side);
        // 同一内容的模块数固定，边长必须是（模块数 + 4）的整数倍
        let code = QrCode::with_error_correction_level(SAMPLE.as_bytes(), EcLevel::M)
            .expect("编码应当成功");
        let total = code.width() as u32 + 2 * QUIET_ZONE_MODULES;
        assert_eq!(side % total, 0);
    }

    #[test]
    fn test_tiny_requested_size_still_renders() {
        // 请求尺寸小于模块数时放大倍数钳制为 1
        let (_, side) = qr_luma(SAMPLE, 10).expect("渲染应当成功");
        assert!(side >= 10);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert!(matches!(render_qr_png("", DEFAULT_QR_SIZE), Err(QrError::Encode(_))));
    }

    #[test]
    fn test_rgba_expands_four_channels() {
        let (rgba, side) = render_qr_rgba(SAMPLE, DEFAULT_QR_SIZE).expect("渲染应当成功");
        assert_eq!(rgba.len() as u32, side * side * 4);
        // 全部像素不透明
        assert!(rgba.chunks(4).all(|px| px[3] == 0xFF));
    }

    #[test]
    fn test_quiet_zone_is_light() {
        let (pixels, side) = qr_luma(SAMPLE, DEFAULT_QR_SIZE).expect("渲染应当成功");
        // 首行处于静区，必须全白
        assert!(pixels[..side as usize].iter().all(|&px| px == 0xFF));
    }
}
