//! Pico Display panel setup
//!
//! ST7789 on SPI0 driven by `mipidsi`, wrapped in a RAM frame so each tick
//! reaches the glass as a single full-screen transfer.

use defmt::*;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::{PIN_16, PIN_17, PIN_18, PIN_19, PIN_20, SPI0};
use embassy_rp::spi::{self, Blocking, Spi};
use embassy_rp::Peri;
use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::{Builder, NoResetPin};
use static_cell::{ConstStaticCell, StaticCell};

use kairos_display::palette::BLACK;
use kairos_display::{Color, Frame, FrameSurface};
use kairos_hal_rp2040::pins::{
    LCD_HEIGHT, LCD_OFFSET_X, LCD_OFFSET_Y, LCD_SPI_HZ, LCD_WIDTH,
};

const FRAME_LEN: usize = LCD_WIDTH as usize * LCD_HEIGHT as usize;

/// ST7789 behind an exclusive SPI0 device
pub type Panel = mipidsi::Display<
    SpiInterface<
        'static,
        ExclusiveDevice<Spi<'static, SPI0, Blocking>, Output<'static>, NoDelay>,
        Output<'static>,
    >,
    ST7789,
    NoResetPin,
>;

/// What the UI draws on
pub type Surface = FrameSurface<'static, Panel>;

/// Display pins (GPIO16-20 on the Pico Display)
pub struct DisplayPins {
    pub spi: Peri<'static, SPI0>,
    pub sck: Peri<'static, PIN_18>,
    pub mosi: Peri<'static, PIN_19>,
    pub cs: Peri<'static, PIN_17>,
    pub dc: Peri<'static, PIN_16>,
    pub backlight: Peri<'static, PIN_20>,
}

static SPI_BUF: StaticCell<[u8; 512]> = StaticCell::new();
static BACKLIGHT: StaticCell<Output<'static>> = StaticCell::new();
// Zero-initialised so it lands in .bss instead of going through the stack
static FRAME: ConstStaticCell<[Color; FRAME_LEN]> = ConstStaticCell::new([BLACK; FRAME_LEN]);

/// Bring up the panel and return the frame-buffered surface
pub fn init(pins: DisplayPins) -> Surface {
    BACKLIGHT.init(Output::new(pins.backlight, Level::High));

    let mut config = spi::Config::default();
    config.frequency = LCD_SPI_HZ;
    let spi = Spi::new_blocking_txonly(pins.spi, pins.sck, pins.mosi, config);

    let cs = Output::new(pins.cs, Level::High);
    let dc = Output::new(pins.dc, Level::Low);
    let device = ExclusiveDevice::new(spi, cs, NoDelay).unwrap();
    let interface = SpiInterface::new(device, dc, SPI_BUF.init([0; 512]));

    // Native portrait 135x240, rotated to landscape
    let panel = Builder::new(ST7789, interface)
        .display_size(LCD_HEIGHT, LCD_WIDTH)
        .display_offset(LCD_OFFSET_X, LCD_OFFSET_Y)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(ColorInversion::Inverted)
        .init(&mut Delay)
        .unwrap_or_else(|_| defmt::panic!("ST7789 init failed"));
    info!("Display initialized ({}x{})", LCD_WIDTH, LCD_HEIGHT);

    let frame = Frame::new(FRAME.take(), u32::from(LCD_WIDTH), u32::from(LCD_HEIGHT))
        .unwrap_or_else(|e| defmt::panic!("Frame buffer: {}", e));
    FrameSurface::new(panel, frame)
}
