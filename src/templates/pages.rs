//! App Router pages and layouts for the `(private)` and `(public)` route groups.

pub const PRIVATE_HOME_PAGE: &str = r#"export default function HomePage() {
  return <h1>Página Inicial Privada</h1>;
}"#;

pub const PRIVATE_LAYOUT: &str = r#"export default function PrivateLayout({ children }: { children: React.ReactNode }) {
  return <div className="private-layout">{children}</div>;
}"#;

pub const LOGIN_PAGE: &str = r#"export default function LoginPage() {
  return <h1>Login</h1>;
}"#;

pub const REGISTER_PAGE: &str = r#"export default function RegisterPage() {
  return <h1>Cadastro</h1>;
}"#;

pub const PUBLIC_LANDING_PAGE: &str = r#"export default function Home() {
  return (
    <main className="flex min-h-screen flex-col items-center justify-center bg-gray-100">
      <h1 className="text-4xl font-bold">Bem-vindo ao Next.js 🚀</h1>
      <p className="text-lg text-gray-600">Projeto inicial configurado!</p>
    </main>
  );
}"#;

pub const PUBLIC_LAYOUT: &str = r#"export default function PublicLayout({ children }: { children: React.ReactNode }) {
  return <div className="public-layout">{children}</div>;
}"#;
