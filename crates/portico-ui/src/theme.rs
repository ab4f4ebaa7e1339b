//! Portico UI Theme - blue login palette and stylesheet.

/// Primary brand colors.
pub mod brand {
    /// Deep blue - gradient start.
    pub const DEEP: &str = "#1e3a8a";

    /// Primary blue - buttons, focus rings, links.
    pub const PRIMARY: &str = "#3b82f6";

    /// Light blue - gradient end.
    pub const LIGHT: &str = "#60a5fa";

    /// Darker blue - hover states.
    pub const DARK: &str = "#1e40af";

    /// Hover blue for links.
    pub const HOVER: &str = "#2563eb";
}

/// Neutral text colors.
pub mod text {
    /// Body text on the card.
    pub const BODY: &str = "#374151";

    /// Input labels and adornments.
    pub const MUTED: &str = "#6b7280";
}

/// Full stylesheet for the login window.
pub fn stylesheet() -> String {
    format!(
        r#"
html, body {{ margin: 0; padding: 0; font-family: system-ui, sans-serif; }}
.login-page {{
  width: 100vw; height: 100vh; display: flex; align-items: center; justify-content: center;
  box-sizing: border-box; overflow: auto; position: relative;
}}
.login-page.no-image {{ background: linear-gradient(135deg, {deep} 0%, {primary} 50%, {light} 100%); }}
.language-selector {{
  position: fixed; top: 20px; left: 20px; z-index: 1000; padding: 8px 12px;
  background: rgba(255,255,255,0.1); border: 1px solid rgba(255,255,255,0.2); border-radius: 12px;
}}
.language-dropdown {{
  display: flex; align-items: center; gap: 8px; background: none; border: none;
  color: white; font-size: 14px; font-weight: 500; cursor: pointer;
}}
.language-options {{
  position: absolute; top: 100%; left: 0; margin-top: 8px; min-width: 140px; padding: 8px;
  background: rgba(255,255,255,0.95); border-radius: 12px; box-shadow: 0 10px 25px rgba(0,0,0,0.15);
}}
.language-option {{
  display: flex; align-items: center; gap: 8px; width: 100%; padding: 8px 12px;
  background: none; border: none; border-radius: 8px; color: {body}; font-size: 14px; cursor: pointer;
}}
.language-option:hover {{ background: rgba(59,130,246,0.1); color: {primary}; }}
.flag-icon {{ width: 20px; height: 15px; border-radius: 2px; }}
.login-container {{ width: 100%; max-width: 420px; padding: 16px; position: relative; z-index: 10; }}
.login-card {{
  position: relative; display: flex; flex-direction: column; align-items: center;
  padding: 40px 30px; border-radius: 20px; background: rgba(255,255,255,0.95);
  box-shadow: 0 20px 40px rgba(0,0,0,0.1);
}}
.login-page.dark .login-card {{ background: rgba(30,30,30,0.95); color: #e5e7eb; }}
.theme-toggle {{
  position: absolute; top: 15px; right: 15px; background: rgba(255,255,255,0.1);
  border: 1px solid rgba(255,255,255,0.2); border-radius: 50%; color: {body}; cursor: pointer; padding: 6px;
}}
.login-page.dark .theme-toggle {{ color: #e5e7eb; }}
.login-logo {{ width: 100%; max-width: 280px; max-height: 80px; margin: 0 auto 20px auto; }}
.login-form {{ width: 100%; margin-top: 8px; }}
.field {{ display: flex; flex-direction: column; margin: 16px 0 8px; }}
.field label {{ color: {muted}; font-weight: 500; font-size: 13px; margin-bottom: 4px; }}
.field-input {{ display: flex; align-items: center; border: 1px solid rgba(59,130,246,0.2); border-radius: 12px; background: rgba(255,255,255,0.8); }}
.field-input:focus-within {{ border: 2px solid {primary}; }}
.field-input input {{ flex: 1; border: none; background: transparent; padding: 14px; font-size: 15px; outline: none; }}
.password-toggle {{ background: none; border: none; color: {muted}; cursor: pointer; padding: 0 12px; }}
.icon {{ width: 20px; height: 20px; }}
.submit {{
  width: 100%; margin: 24px 0 16px; padding: 12px 0; border: none; border-radius: 12px; color: white;
  font-size: 16px; font-weight: 600; cursor: pointer;
  background: linear-gradient(45deg, {primary}, {dark});
}}
.submit:hover {{ background: linear-gradient(45deg, {hover}, {dark}); }}
.register-row {{ display: flex; justify-content: center; }}
.register-link {{ color: {primary}; font-weight: 600; text-decoration: none; cursor: pointer; }}
.register-link:hover {{ color: {hover}; text-decoration: underline; }}
"#,
        deep = brand::DEEP,
        primary = brand::PRIMARY,
        light = brand::LIGHT,
        dark = brand::DARK,
        hover = brand::HOVER,
        body = text::BODY,
        muted = text::MUTED,
    )
}
