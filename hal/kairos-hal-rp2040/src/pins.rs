//! Pimoroni Pico Display pin assignments
//!
//! The Pico Display pack is fixed wiring, so pins are constants rather
//! than config-driven:
//!
//! - Buttons A/B/X/Y: GPIO12-15 (active low)
//! - ST7789 panel on SPI0: CS=GPIO17, SCK=GPIO18, MOSI=GPIO19, DC=GPIO16
//! - Backlight: GPIO20

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// Function of a pin on the Pico Display pack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    ButtonA,
    ButtonB,
    ButtonX,
    ButtonY,
    LcdDc,
    LcdCs,
    LcdSck,
    LcdMosi,
    Backlight,
}

impl PinRole {
    /// Every role on the board
    pub const ALL: [PinRole; 9] = [
        PinRole::ButtonA,
        PinRole::ButtonB,
        PinRole::ButtonX,
        PinRole::ButtonY,
        PinRole::LcdDc,
        PinRole::LcdCs,
        PinRole::LcdSck,
        PinRole::LcdMosi,
        PinRole::Backlight,
    ];

    /// Get the GPIO number for this role
    pub const fn gpio(self) -> u8 {
        match self {
            PinRole::ButtonA => 12,
            PinRole::ButtonB => 13,
            PinRole::ButtonX => 14,
            PinRole::ButtonY => 15,
            PinRole::LcdDc => 16,
            PinRole::LcdCs => 17,
            PinRole::LcdSck => 18,
            PinRole::LcdMosi => 19,
            PinRole::Backlight => 20,
        }
    }
}

/// Panel geometry in landscape orientation
pub const LCD_WIDTH: u16 = 240;
pub const LCD_HEIGHT: u16 = 135;

/// ST7789 RAM offset for the 135x240 glass (portrait coordinates)
pub const LCD_OFFSET_X: u16 = 52;
pub const LCD_OFFSET_Y: u16 = 40;

/// SPI clock for the panel
pub const LCD_SPI_HZ: u32 = 62_500_000;
