// 網格檢視器整合入口
// 匯集 grid 載入、render 繪圖與 interface 視窗

pub mod session;

pub use session::GridViewer;
