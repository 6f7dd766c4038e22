//! Route protection gate.
//!
//! Public routes redirect signed-in users to `/home`; every other route
//! redirects to `/` unless the `access-token` cookie holds an unexpired JWT.

pub const MIDDLEWARE: &str = r#"/* eslint-disable @typescript-eslint/no-unused-vars */
import { type NextRequest, NextResponse } from "next/server"
import jwt from "jsonwebtoken"

export const TOKEN_KEY = "access-token"

const PUBLIC_ROUTES = ["/", "/register", "/login"]

function isTokenExpired(token: string): boolean {
  try {
    const decoded = jwt.decode(token) as jwt.JwtPayload | null
    if (!decoded || !decoded.exp) {
      return true
    }
    const currentTime = Math.floor(Date.now() / 1000)
    return decoded.exp < currentTime
  } catch (error) {
    return true
  }
}

export async function middleware(request: NextRequest) {
  const token = request.cookies.get(TOKEN_KEY)?.value
  const { pathname } = request.nextUrl

  if (PUBLIC_ROUTES.includes(pathname)) {
    if (token && !isTokenExpired(token)) {
      return NextResponse.redirect(new URL("/home", request.url))
    }
    return NextResponse.next()
  }

  if (!token || isTokenExpired(token)) {
    return NextResponse.redirect(new URL("/", request.url))
  }

  return NextResponse.next()
}

export const config = {
  matcher: [
    "/((?!api|_next/static|_next/image|favicon.ico|sitemap.xml|robots.txt).*)",
  ],
}
"#;

/// Cookie helpers shared by the login flow and the API client
pub const SET_COOKIE: &str = r#""use server"

import { cookies } from "next/headers"
import { TOKEN_KEY } from "@/middleware"

const setCookie = async (access_token: string) => {
  const cookiesData = await cookies()
  cookiesData.set({
    name: TOKEN_KEY,
    value: access_token,
    httpOnly: true,
    path: "/",
    secure: true,
    sameSite: "strict",
  })
}

export const clearAuthCookies = async () => {
  const cookieStore = await cookies()
  cookieStore.delete(TOKEN_KEY)
}

export const getCookie = async () => {
  const cookieStore = await cookies()
  return cookieStore.get(TOKEN_KEY)
}

export default setCookie;
"#;
