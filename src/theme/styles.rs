//! Global CSS styles for EduConnect.
//!
//! Warm notebook aesthetic: paper backgrounds, ink text, indigo
//! actions. Card entry motion is driven by inline styles from the
//! reveal plan, so the stylesheet only describes resting appearance.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #faf7f2;
  --paper-raised: #ffffff;
  --paper-border: #e6e0d6;

  /* INK (Text) */
  --ink: #1f2430;
  --ink-soft: rgba(31, 36, 48, 0.72);
  --ink-muted: rgba(31, 36, 48, 0.5);

  /* INDIGO (Actions, Links) */
  --indigo: #4f5dff;
  --indigo-deep: #3a46d6;
  --indigo-wash: rgba(79, 93, 255, 0.12);

  /* TEAL (Subjects, Tags) */
  --teal: #0fa3a3;
  --teal-wash: rgba(15, 163, 163, 0.12);

  /* AMBER (Helpful votes, Highlights) */
  --amber: #f5a623;
  --amber-wash: rgba(245, 166, 35, 0.15);

  /* SEMANTIC */
  --danger: #d64550;
  --success: #2e9e5b;

  /* Typography */
  --font-serif: 'Fraunces', 'Iowan Old Style', Georgia, serif;
  --font-sans: 'Inter', 'Segoe UI', 'Helvetica Neue', sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 2.75rem;

  /* Surfaces */
  --radius: 12px;
  --radius-sm: 8px;
  --shadow-card: 0 1px 3px rgba(31, 36, 48, 0.08), 0 8px 24px rgba(31, 36, 48, 0.06);
  --shadow-lifted: 0 4px 12px rgba(31, 36, 48, 0.12), 0 12px 32px rgba(31, 36, 48, 0.1);

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.65;
  min-height: 100vh;
}

a {
  color: var(--indigo);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--ink);
  letter-spacing: -0.01em;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
  color: var(--ink);
}

.muted {
  color: var(--ink-muted);
  font-size: var(--text-sm);
}

/* === App Shell === */
.app-shell {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.page-content {
  flex: 1;
  width: 100%;
  max-width: 920px;
  margin: 0 auto;
  padding: 1.5rem 1.25rem 3rem;
}

.app-footer {
  padding: 1rem;
  text-align: center;
  color: var(--ink-muted);
  font-size: var(--text-xs);
  border-top: 1px solid var(--paper-border);
}

/* === Navigation Header === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: var(--paper-raised);
  border-bottom: 1px solid var(--paper-border);
}

.nav-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  max-width: 920px;
  margin: 0 auto;
  padding: 0.65rem 1.25rem;
}

.app-logo {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--ink);
  white-space: nowrap;
}

.app-logo .logo-accent {
  color: var(--indigo);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 0.25rem;
}

.nav-link {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.4rem 0.75rem;
  border-radius: var(--radius-sm);
  color: var(--ink-soft);
  font-size: var(--text-sm);
  font-weight: 500;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.nav-link:hover {
  background: var(--indigo-wash);
  color: var(--indigo-deep);
  text-decoration: none;
}

.nav-link.active {
  background: var(--indigo-wash);
  color: var(--indigo-deep);
}

.nav-badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  min-width: 1.2rem;
  height: 1.2rem;
  padding: 0 0.3rem;
  border-radius: 999px;
  background: var(--indigo);
  color: #fff;
  font-size: var(--text-xs);
  font-weight: 600;
}

.nav-session {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.nav-avatar {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background: var(--teal-wash);
  color: var(--teal);
  font-weight: 700;
  font-size: var(--text-sm);
  border: 1px solid var(--paper-border);
  cursor: pointer;
}

.nav-avatar:hover {
  box-shadow: 0 0 0 3px var(--teal-wash);
  text-decoration: none;
}

/* === Mobile Navigation === */
/* The hamburger only exists on narrow windows; the panel's `open`
   marker class is flipped by the toggle and nothing else. */
.mobile-nav-toggle {
  display: none;
  border: 1px solid var(--paper-border);
  background: var(--paper-raised);
  color: var(--ink);
  font-size: var(--text-lg);
  line-height: 1;
  padding: 0.35rem 0.6rem;
  border-radius: var(--radius-sm);
  cursor: pointer;
}

.mobile-nav {
  display: none;
  flex-direction: column;
  background: var(--paper-raised);
  border-bottom: 1px solid var(--paper-border);
  padding: 0.5rem 1.25rem 0.75rem;
  gap: 0.25rem;
}

.mobile-nav .nav-link {
  width: 100%;
  padding: 0.6rem 0.75rem;
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .mobile-nav-toggle {
    display: inline-flex;
  }

  .mobile-nav.open {
    display: flex;
  }
}

/* === Buttons === */
.btn-primary {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.4rem;
  padding: 0.55rem 1.1rem;
  border: none;
  border-radius: var(--radius-sm);
  background: var(--indigo);
  color: #fff;
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.btn-primary:hover:not(:disabled) {
  background: var(--indigo-deep);
  transform: translateY(-1px);
}

.btn-primary:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-badge {
  padding: 0.25rem 0.6rem;
  border: 1px solid var(--paper-border);
  border-radius: 999px;
  background: transparent;
  color: var(--ink-soft);
  font-size: var(--text-xs);
  font-weight: 500;
  cursor: pointer;
}

.btn-badge:hover {
  border-color: var(--indigo);
  color: var(--indigo);
}

.btn-hero {
  display: inline-flex;
  align-items: center;
  padding: 0.8rem 1.8rem;
  border: none;
  border-radius: var(--radius);
  background: var(--indigo);
  color: #fff;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 600;
  cursor: pointer;
  box-shadow: var(--shadow-card);
  transition: background var(--transition-fast), box-shadow var(--transition-normal);
}

.btn-hero:hover {
  background: var(--indigo-deep);
  box-shadow: var(--shadow-lifted);
}

.btn-vote {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  padding: 0.45rem 0.9rem;
  border: 1px solid var(--paper-border);
  border-radius: 999px;
  background: transparent;
  color: var(--ink-soft);
  font-size: var(--text-sm);
  font-weight: 600;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-vote:hover:not(:disabled) {
  border-color: var(--amber);
  color: var(--amber);
}

.btn-vote.voted {
  background: var(--amber-wash);
  border-color: var(--amber);
  color: var(--amber);
}

.btn-vote:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-ghost {
  padding: 0.55rem 1.1rem;
  border: 1px solid var(--paper-border);
  border-radius: var(--radius-sm);
  background: transparent;
  color: var(--ink-soft);
  font-size: var(--text-sm);
  font-weight: 500;
  cursor: pointer;
}

.btn-ghost:hover:not(:disabled) {
  border-color: var(--ink-muted);
  color: var(--ink);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: var(--radius-sm);
  background: transparent;
  color: var(--ink-soft);
  font-size: var(--text-lg);
  cursor: pointer;
}

.icon-btn:hover {
  background: var(--indigo-wash);
  color: var(--ink);
}

.inline-link-btn {
  border: none;
  background: none;
  color: var(--indigo);
  font-size: inherit;
  cursor: pointer;
  text-decoration: underline;
}

/* === Forms === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.3rem;
  margin-bottom: 1rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--ink);
}

.input-hint {
  color: var(--ink-muted);
  font-weight: 400;
  font-style: italic;
}

.input-field {
  width: 100%;
  padding: 0.55rem 0.75rem;
  border: 1px solid var(--paper-border);
  border-radius: var(--radius-sm);
  background: var(--paper-raised);
  color: var(--ink);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field::placeholder {
  color: var(--ink-muted);
  font-style: italic;
}

.input-field:focus {
  outline: none;
  border-color: var(--indigo);
  box-shadow: 0 0 0 3px var(--indigo-wash);
}

.input-field:disabled {
  opacity: 0.6;
}

.textarea {
  resize: vertical;
  line-height: 1.6;
}

.search-input-wrapper {
  position: relative;
  width: 100%;
}

.search-icon {
  position: absolute;
  left: 0.7rem;
  top: 50%;
  transform: translateY(-50%);
  font-size: var(--text-sm);
  pointer-events: none;
  opacity: 0.6;
}

.search-input {
  padding-left: 2.2rem;
}

.form-error {
  margin: 0.5rem 0 1rem;
  padding: 0.6rem 0.9rem;
  border-radius: var(--radius-sm);
  background: rgba(214, 69, 80, 0.1);
  border: 1px solid rgba(214, 69, 80, 0.35);
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Subject Pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin: 0.75rem 0 1.25rem;
}

.pill {
  padding: 0.35rem 0.85rem;
  border: 1px solid var(--paper-border);
  border-radius: 999px;
  background: var(--paper-raised);
  color: var(--ink-soft);
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pill:hover {
  border-color: var(--teal);
  color: var(--teal);
}

.pill.selected {
  background: var(--indigo);
  border-color: var(--indigo);
  color: #fff;
}

/* === Cards === */
/* Resting appearance only. Entry opacity/transform comes from the
   reveal plan as inline style on first render. */
.card {
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  padding: 1.15rem 1.3rem;
}

.card-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

@media (max-width: 768px) {
  .card-grid {
    grid-template-columns: 1fr;
  }
}

.post-card {
  display: flex;
  flex-direction: column;
  gap: 0.55rem;
  transition: box-shadow var(--transition-fast);
}

.post-card:hover {
  box-shadow: var(--shadow-lifted);
}

.post-card-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.5rem;
}

.subject-chip {
  display: inline-flex;
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  background: var(--teal-wash);
  color: var(--teal);
  font-size: var(--text-xs);
  font-weight: 600;
  letter-spacing: 0.02em;
}

.post-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--ink);
  line-height: 1.35;
}

.post-title a {
  color: inherit;
}

.post-preview {
  color: var(--ink-soft);
  font-size: var(--text-sm);
}

.post-meta {
  display: flex;
  align-items: center;
  flex-wrap: wrap;
  gap: 0.75rem;
  color: var(--ink-muted);
  font-size: var(--text-xs);
}

.meta-author {
  font-weight: 600;
  color: var(--ink-soft);
}

.meta-helpful {
  color: var(--amber);
  font-weight: 600;
}

/* === Hero Card === */
.hero-card {
  background: linear-gradient(135deg, var(--indigo) 0%, var(--indigo-deep) 65%, #2d3480 100%);
  border: none;
  border-radius: var(--radius);
  box-shadow: var(--shadow-lifted);
  color: #fff;
  padding: 2.25rem 2rem;
  margin-bottom: 1.5rem;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 700;
  line-height: 1.15;
  margin-bottom: 0.5rem;
}

.hero-tagline {
  font-size: var(--text-lg);
  opacity: 0.85;
  max-width: 34rem;
  margin-bottom: 1.5rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
}

.hero-actions .btn-hero {
  background: #fff;
  color: var(--indigo-deep);
}

.hero-actions .btn-hero:hover {
  background: var(--paper);
}

.hero-actions .btn-ghost {
  border-color: rgba(255, 255, 255, 0.5);
  color: #fff;
}

.hero-actions .btn-ghost:hover:not(:disabled) {
  border-color: #fff;
  color: #fff;
}

/* === Post Detail === */
.post-detail-header {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  margin-bottom: 1.25rem;
}

.post-detail-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 700;
  line-height: 1.2;
}

.post-detail-body {
  margin-bottom: 1.5rem;
}

.post-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 0;
  border-top: 1px solid var(--paper-border);
  border-bottom: 1px solid var(--paper-border);
  margin-bottom: 1.5rem;
}

.resource-link {
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  font-size: var(--text-sm);
}

/* === Markdown Body === */
.markdown-body {
  color: var(--ink);
  line-height: 1.7;
}

.markdown-body h1,
.markdown-body h2,
.markdown-body h3 {
  font-family: var(--font-serif);
  margin: 1.2rem 0 0.5rem;
  line-height: 1.3;
}

.markdown-body p {
  margin: 0.6rem 0;
}

.markdown-body ul,
.markdown-body ol {
  margin: 0.6rem 0 0.6rem 1.4rem;
}

.markdown-body code {
  background: var(--indigo-wash);
  border-radius: 4px;
  padding: 0.1rem 0.35rem;
  font-size: 0.9em;
}

.markdown-body pre {
  background: var(--ink);
  color: var(--paper);
  border-radius: var(--radius-sm);
  padding: 0.9rem 1rem;
  overflow-x: auto;
  margin: 0.8rem 0;
}

.markdown-body pre code {
  background: none;
  padding: 0;
}

.markdown-body blockquote {
  border-left: 3px solid var(--teal);
  padding-left: 1rem;
  color: var(--ink-soft);
  margin: 0.8rem 0;
}

/* === Attachments === */
.attachment-chip {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0.9rem;
  border: 1px solid var(--paper-border);
  border-radius: var(--radius-sm);
  background: var(--paper-raised);
  font-size: var(--text-sm);
}

.attachment-size {
  color: var(--ink-muted);
  font-size: var(--text-xs);
}

.attachment-image {
  max-width: 100%;
  border-radius: var(--radius-sm);
  border: 1px solid var(--paper-border);
  margin: 0.75rem 0;
}

/* === Comments === */
.comment-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  margin-bottom: 1.25rem;
}

.comment-item {
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  border-radius: var(--radius-sm);
  padding: 0.75rem 1rem;
}

.comment-head {
  display: flex;
  align-items: baseline;
  gap: 0.5rem;
  margin-bottom: 0.25rem;
}

.comment-author {
  font-weight: 600;
  font-size: var(--text-sm);
}

.comment-time {
  color: var(--ink-muted);
  font-size: var(--text-xs);
}

.comment-body {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

.comment-composer {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  align-items: flex-end;
}

.comment-composer .input-field {
  width: 100%;
}

/* === Messages === */
.message-list {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.message-row {
  display: flex;
  flex-direction: column;
  gap: 0.2rem;
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  border-radius: var(--radius-sm);
  padding: 0.75rem 1rem;
}

.message-row.unread {
  border-left: 3px solid var(--indigo);
}

.message-head {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
  gap: 0.5rem;
}

.message-sender {
  font-weight: 600;
  font-size: var(--text-sm);
}

.message-time {
  color: var(--ink-muted);
  font-size: var(--text-xs);
}

.message-body {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

/* === Modals === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(31, 36, 48, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
  padding: 1rem;
}

.modal {
  width: 100%;
  max-width: 480px;
  background: var(--paper-raised);
  border-radius: var(--radius);
  box-shadow: var(--shadow-lifted);
  padding: 1.25rem 1.4rem;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.modal-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 600;
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 0.6rem;
  margin-top: 1rem;
}

.recipient-select {
  width: 100%;
  padding: 0.55rem 0.75rem;
  border: 1px solid var(--paper-border);
  border-radius: var(--radius-sm);
  background: var(--paper-raised);
  color: var(--ink);
  font-family: var(--font-sans);
  font-size: var(--text-base);
}

/* === Profile === */
.profile-header {
  display: flex;
  align-items: center;
  gap: 1.25rem;
  margin-bottom: 1.5rem;
}

.profile-avatar {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 4.5rem;
  height: 4.5rem;
  border-radius: 50%;
  background: var(--teal-wash);
  color: var(--teal);
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 700;
  flex-shrink: 0;
}

.profile-identity {
  flex: 1;
}

.profile-name {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 700;
}

.profile-school {
  color: var(--ink-soft);
}

.profile-joined {
  color: var(--ink-muted);
  font-size: var(--text-sm);
}

.profile-actions {
  display: flex;
  align-items: center;
  gap: 0.6rem;
}

.copy-email-btn.copied {
  border-color: var(--success);
  color: var(--success);
}

.profile-section {
  margin-bottom: 1.5rem;
}

.profile-section .section-header {
  font-size: var(--text-lg);
  margin-bottom: 0.5rem;
}

.profile-field-text {
  color: var(--ink-soft);
  white-space: pre-wrap;
}

.interest-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
}

.interest-tag {
  padding: 0.2rem 0.65rem;
  border-radius: 999px;
  background: var(--teal-wash);
  color: var(--teal);
  font-size: var(--text-xs);
  font-weight: 600;
}

/* === Auth Pages === */
.auth-page {
  display: flex;
  align-items: center;
  justify-content: center;
  flex: 1;
  padding: 2rem 1rem;
}

.auth-card {
  width: 100%;
  max-width: 420px;
  background: var(--paper-raised);
  border: 1px solid var(--paper-border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-card);
  padding: 1.75rem 1.6rem;
}

.auth-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 700;
  margin-bottom: 0.25rem;
}

.auth-subtitle {
  color: var(--ink-muted);
  font-size: var(--text-sm);
  margin-bottom: 1.25rem;
}

.auth-switch {
  margin-top: 1rem;
  font-size: var(--text-sm);
  color: var(--ink-soft);
  text-align: center;
}

/* === States === */
.error-banner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 1rem;
  padding: 0.7rem 1rem;
  border-radius: var(--radius-sm);
  background: rgba(214, 69, 80, 0.1);
  border: 1px solid rgba(214, 69, 80, 0.35);
  color: var(--danger);
  font-size: var(--text-sm);
}

.error-dismiss {
  border: none;
  background: none;
  color: var(--danger);
  font-size: var(--text-xs);
  cursor: pointer;
  text-decoration: underline;
}

.loading-state {
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 4rem 1rem;
  color: var(--ink-muted);
}

.empty-state {
  padding: 3rem 1rem;
  text-align: center;
  color: var(--ink-muted);
}

.empty-state .section-header {
  color: var(--ink-soft);
  margin-bottom: 0.5rem;
}

/* === Page Headers === */
.page-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 1rem;
}

.feed-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}
"#;
